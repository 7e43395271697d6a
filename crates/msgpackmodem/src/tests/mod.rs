mod decode_bad;
mod utils;
