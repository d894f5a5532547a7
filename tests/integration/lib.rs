mod settings_form;

pub(crate) use settings_form::*;

mod host_sequence_tests;
mod navigation_tests;
