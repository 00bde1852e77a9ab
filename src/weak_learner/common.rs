pub(crate) mod type_and_struct;
pub(crate) mod split_rule;
