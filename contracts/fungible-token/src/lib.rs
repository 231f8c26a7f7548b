//! A fungible token. A thin wrapper around the CIS-2 standard providing
//! mint, burn and transfer with balance and supply accounting.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod external;
mod state;
