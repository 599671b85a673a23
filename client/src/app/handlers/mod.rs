//! # User Action Handlers
//!
//! Handlers run on the main thread in response to UI actions. They mutate
//! state synchronously (holding the write lock briefly) and spawn async
//! tasks for anything that touches the network.

pub mod chat;
