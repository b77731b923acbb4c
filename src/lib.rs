pub mod assemble;
pub mod classify;
pub mod config;
pub mod convert;
pub mod extract;
pub mod fetch;
pub mod names;
pub mod output;
pub mod parser;
pub mod record;
pub mod summary;

pub mod gtfs_rt {
    include!(concat!(env!("OUT_DIR"), "/transit_realtime.rs"));
}
