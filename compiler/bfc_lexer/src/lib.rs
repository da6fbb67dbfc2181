// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

mod tokenizer_impl;

pub use tokenizer_impl::Tokenizer;
