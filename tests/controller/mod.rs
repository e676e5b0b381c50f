//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted request data, verifying status codes and
//! JSON bodies for success and error cases.

mod search;
mod species;

use aquadex_test_utils::prelude::*;

use crate::util::{json_body, seeded_context, TestContextExt};
