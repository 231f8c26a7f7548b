//! A passive value sink. It accepts funds on either of its entry points and
//! records which one was invoked.
#![cfg_attr(not(feature = "std"), no_std)]

use crate::{events::*, structs::*};
use commons::*;
use concordium_std::*;
use core::marker::PhantomData;

mod contract;
mod events;
mod structs;
