mod fields;

pub use fields::{
    decode_burst, normalize_range, parse_capacity, parse_id_list, parse_name_list, parse_orders,
    Orders,
};
