mod nist_local;
mod v4_local;
