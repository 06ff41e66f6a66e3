pub mod zfs;
