mod v3_local;
mod v4_local;
