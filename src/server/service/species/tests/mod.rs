
use aquadex_test_utils::prelude::*;

use crate::{model::species::Category, server::service::species::SpeciesService};
