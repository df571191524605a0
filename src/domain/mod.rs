//
// Copyright (c) 2025 Nathan Fiedler
//
pub mod entities;
pub mod repositories;
pub mod usecases;
