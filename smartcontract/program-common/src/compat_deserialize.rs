use borsh::BorshDeserialize;
use std::io::{Cursor, Result as IoResult};

pub fn compat_deserialize<T: BorshDeserialize>(data: &[u8]) -> IoResult<T> {
    let mut cur = Cursor::new(data);
    T::deserialize_reader(&mut cur)
}
