/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
pub enum ContractError {
    #[error("EmptySequenceError: {0}")]
    EmptySequenceError(Cow<'static, str>),
}
