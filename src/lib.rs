// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]
#![allow(clippy::module_name_repetitions)]

//! A digital business card, rendered from a typed profile and a subscription tier.
//!
//! Refer to [`docs`] for an overview of the URL contract and the profile format.

pub mod docs;

pub mod binder;
pub mod card;
pub mod config;
pub mod error;
pub mod features;
pub mod link;
pub mod page;
pub mod profile;
pub mod sheet;
pub mod surface;
pub mod tier;

pub use self::{
    binder::{Binder, NavigationMode, Navigator, apply_href},
    card::CardRenderer,
    config::PageConfig,
    error::ConfigError,
    features::{FeatureSet, features_for},
    link::Platform,
    page::{DeferredTask, Effect, Event, Page},
    profile::BusinessProfile,
    sheet::{QrService, QrSheet, SheetState},
    surface::{Control, ControlId, MemoryControl, MemorySurface, Surface},
    tier::{Tier, TierChange, TierContext, resolve_tier, resolve_tier_from_url},
};
