//! A time-locked donation pool. Donors deposit funds until the expiry, after
//! which the beneficiary can claim the accumulated balance.
#![cfg_attr(not(feature = "std"), no_std)]

use crate::{events::*, structs::*};
use commons::*;
use concordium_std::*;

mod contract;
mod events;
mod impls;
mod structs;
