#![allow(dead_code)]

pub use vspc_dashboard::upstream::testing::FakeUpstream;

pub const GIB: u64 = 1 << 30;
