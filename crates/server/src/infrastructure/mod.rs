//! Storage adapters and the port traits they implement.

pub mod clickhouse;
pub mod mongo;
pub mod neo4j;
pub mod ports;
