//! An open first-price auction with escrowed bids, anti-snipe deadline
//! extension and an operator commission on settlement.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod state;
