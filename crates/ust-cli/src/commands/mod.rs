// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod codegen;
pub mod config;
pub mod verify;
pub mod vk;
