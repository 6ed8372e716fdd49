//! Nested-object request shape: messages used as map keys and set members.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SubMessage {
    pub id: Option<i64>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Message {
    pub id: Option<i64>,
    pub value: Option<String>,
    pub sub_messages: Option<Vec<SubMessage>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObjReq {
    pub msg: Message,
    pub msg_map: HashMap<Message, SubMessage>,
    pub sub_msgs: Vec<SubMessage>,
    pub msg_set: Option<HashSet<Message>>,
    pub flag_msg: String,
    pub mock_cost: Option<String>,
}
