// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: base image loading, the results handoff, export and
//! the save sink.

pub mod handoff;
pub mod media;
pub mod serialization;
pub mod upload;
