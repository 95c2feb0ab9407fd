use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_BEACON_ENDPOINT: &str = "http://localhost:5052/eth/v1/beacon/headers/finalized";
pub const DEFAULT_EXECUTION_ENDPOINT: &str = "http://localhost:8545";
pub const DEFAULT_EXPLORER_ENDPOINT: &str = "https://beaconcha.in/api/v1/slot/latest";
pub const DEFAULT_HTTP_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_HTTP_PORT: u16 = 8888;
pub const DEFAULT_PUBLIC_EXECUTION_ENDPOINT: &str = "https://rpc.sepolia.org";
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 5;
