//! Request shape of the stability test service.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum TestEnum {
    #[default]
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct STRequest {
    pub name: String,
    pub on: Option<bool>,
    pub b: i8,
    pub int16: i16,
    pub int32: i32,
    pub int64: i64,
    pub d: f64,
    pub str: String,
    pub bin: Vec<u8>,
    pub string_map: HashMap<String, String>,
    pub string_list: Vec<String>,
    pub string_set: BTreeSet<String>,
    pub e: TestEnum,
    pub flag_msg: Option<String>,
}
