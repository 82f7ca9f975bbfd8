// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod count;
pub mod group;
pub mod reduce;
pub mod runner;


pub use runner::{PipelineOutcome, PipelineRunner};
