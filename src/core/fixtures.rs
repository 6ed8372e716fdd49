use crate::core::metainfo::Context;
use crate::domain::instparam::{Message, ObjReq, SubMessage};
use crate::domain::stability::{STRequest, TestEnum};
use crate::utils::random::random_string_with;
use rand::Rng;
use std::collections::{BTreeSet, HashMap, HashSet};

pub const TRANSIENT_KEY: &str = "TK";
pub const TRANSIENT_VALUE: &str = "TV";
pub const PERSISTENT_KEY: &str = "PK";
pub const PERSISTENT_VALUE: &str = "PV";

fn tag(ctx: Context) -> Context {
    ctx.with_value(TRANSIENT_KEY, TRANSIENT_VALUE)
        .with_persistent_value(PERSISTENT_KEY, PERSISTENT_VALUE)
}

pub fn create_st_request(ctx: Context) -> (Context, STRequest) {
    create_st_request_with_rng(ctx, &mut rand::thread_rng())
}

pub fn create_st_request_with_rng<R: Rng + ?Sized>(ctx: Context, rng: &mut R) -> (Context, STRequest) {
    let str = random_string_with(rng, 100);
    let mut string_map = HashMap::new();
    string_map.insert("key1".to_string(), random_string_with(rng, 100));
    string_map.insert("key2".to_string(), random_string_with(rng, 10));
    let string_list = vec![
        random_string_with(rng, 10),
        random_string_with(rng, 20),
        random_string_with(rng, 30),
    ];
    let string_set: BTreeSet<String> = [random_string_with(rng, 10), random_string_with(rng, 100)]
        .into_iter()
        .collect();

    let req = STRequest {
        name: "byted".to_string(),
        on: Some(true),
        b: 10,
        int16: 10,
        int32: i32::MAX,
        int64: i64::MAX,
        d: 0.0,
        str,
        bin: vec![1, b'a', b'*'],
        string_map,
        string_list,
        string_set,
        e: TestEnum::First,
        flag_msg: None,
    };
    (tag(ctx), req)
}

pub fn create_obj_req(ctx: Context) -> (Context, ObjReq) {
    create_obj_req_with_rng(ctx, &mut rand::thread_rng())
}

pub fn create_obj_req_with_rng<R: Rng + ?Sized>(ctx: Context, rng: &mut R) -> (Context, ObjReq) {
    let id = Some(rng.gen_range(0..100_i64));
    let sub_msg1 = SubMessage {
        id,
        value: Some(random_string_with(rng, 100)),
    };
    let sub_msg2 = SubMessage {
        id: Some(i64::MAX),
        value: Some(random_string_with(rng, 10)),
    };
    let sub_msgs = vec![sub_msg1.clone(), sub_msg2];

    let msg = Message {
        id,
        value: Some(random_string_with(rng, 100)),
        sub_messages: Some(sub_msgs.clone()),
    };

    let mut msg_map = HashMap::new();
    msg_map.insert(msg.clone(), sub_msg1);
    let mut msg_set = HashSet::new();
    msg_set.insert(msg.clone());

    let req = ObjReq {
        msg,
        msg_map,
        sub_msgs,
        msg_set: Some(msg_set),
        ..ObjReq::default()
    };
    (tag(ctx), req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_fixtures_are_reproducible() {
        let (_, a) = create_st_request_with_rng(Context::new(), &mut StdRng::seed_from_u64(7));
        let (_, b) = create_st_request_with_rng(Context::new(), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        let (_, a) = create_obj_req_with_rng(Context::new(), &mut StdRng::seed_from_u64(7));
        let (_, b) = create_obj_req_with_rng(Context::new(), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_existing_annotations_are_kept() {
        let ctx = Context::new().with_value("trace", "abc");
        let (ctx, _) = create_st_request(ctx);
        assert_eq!(ctx.get_value("trace"), Some("abc"));
        assert_eq!(ctx.get_value(TRANSIENT_KEY), Some(TRANSIENT_VALUE));
    }
}
