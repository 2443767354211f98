// Copyright (c) 2021-2025 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use proptest::{collection::vec as gen_vec, prelude::*};
use rstest::rstest;
use test_utils::{
    encode_compact_size, encode_push, encode_push_as, encode_to_hex, make_seedable_rng,
    random::{Rng, Seed},
    random_bytes, PushForm,
};

use crate::{Error, PushItem, ReaderState, ScriptReader};


#[test]
fn direct_push_every_length() {
    for len in 1..=75u8 {
        let payload: Vec<u8> = (0..len).map(|i| i.wrapping_mul(31)).collect();
        let encoded = encode_push_as(PushForm::Direct, &payload);
        assert_eq!(encoded[0], len);

        let mut reader = ScriptReader::new(&encoded);
        let item = reader.read_push_data().unwrap();
        assert_eq!(item, PushItem::Data(Cow::Borrowed(&payload[..])));
        assert_eq!(reader.position(), 1 + len as usize);
    }
}

#[rstest]
#[trace]
#[case(PushForm::PushData1, 0)]
#[case(PushForm::PushData1, 1)]
#[case(PushForm::PushData1, 255)]
#[case(PushForm::PushData2, 0)]
#[case(PushForm::PushData2, 256)]
#[case(PushForm::PushData2, 65535)]
#[case(PushForm::PushData4, 0)]
#[case(PushForm::PushData4, 65536)]
#[case(PushForm::PushData4, 100_000)]
fn pushdata_forms(#[case] form: PushForm, #[case] len: usize) {
    let payload = vec![0x5a; len];
    let encoded = encode_push_as(form, &payload);

    let mut reader = ScriptReader::new(&encoded);
    let item = reader.read_push_data().unwrap();
    assert_eq!(item.data(), Some(&payload[..]));
    assert_eq!(reader.position(), form.header_len() + len);
    assert!(reader.at_end());
}

#[rstest]
#[trace]
#[case(0)]
#[case(0xfc)]
#[case(0xfd)]
#[case(0xffff)]
#[case(0x10000)]
#[case(0xffffffff)]
#[case(0x100000000)]
#[case((1 << 53) - 1)]
#[case(1 << 53)]
#[case((1 << 53) + 1)]
#[case(u64::MAX)]
fn varint_boundaries(#[case] value: u64) {
    let encoded = encode_compact_size(value);

    let mut reader = ScriptReader::new(&encoded);
    assert_eq!(reader.read_varint_num(), Ok(value));
    assert!(reader.at_end());

    let mut reader = ScriptReader::new(&encoded);
    assert_eq!(reader.read_varint_buf().unwrap().as_ref(), &encoded[..]);
    assert!(reader.at_end());
}

#[test]
fn hex_and_byte_readers_agree() {
    let script = [
        encode_push(b"sig"),
        vec![0x00, 0x51],
        encode_push_as(PushForm::PushData2, b"key"),
        vec![0xac],
    ]
    .concat();

    let mut from_bytes = ScriptReader::new(&script);
    let mut from_hex = ScriptReader::from_hex(&encode_to_hex(&script)).unwrap();

    let items_bytes = from_bytes.decode_parts().collect::<crate::Result<Vec<_>>>().unwrap();
    let items_hex = from_hex.decode_parts().collect::<crate::Result<Vec<_>>>().unwrap();
    assert_eq!(items_bytes, items_hex);
    assert_eq!(items_bytes.len(), 5);
}

#[test]
fn underrun_scenario() {
    let mut reader = ScriptReader::from_hex("4e05000000").unwrap();
    let parts = reader.decode_parts().collect::<Vec<_>>();
    assert_eq!(parts.len(), 1);
    assert!(matches!(parts[0], Err(Error::BufferUnderrun { .. })));
}

#[test]
fn state_snapshot_in_the_middle() {
    let script = [encode_push(b"first"), encode_push(b"second")].concat();
    let mut reader = ScriptReader::new(&script);
    reader.read_push_data().unwrap();

    let ReaderState { buf, pos } = reader.state();
    assert_eq!(pos, 6);
    let mut resumed = ScriptReader::from_state(ReaderState::new(buf).with_position(pos)).unwrap();
    assert_eq!(resumed.read_push_data().unwrap().data(), Some(&b"second"[..]));
    assert!(resumed.at_end());
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn mixed_reads(#[case] seed: Seed) {
    let mut rng = make_seedable_rng!(seed);

    let u16_val = rng.gen::<u16>();
    let u32_val = rng.gen::<u32>();
    let i32_val = rng.gen::<i32>();
    let u64_val = rng.gen::<u64>();
    let blob_len = rng.gen_range(0..600);
    let blob = random_bytes(&mut rng, blob_len);

    let parts: [&[u8]; 7] = [
        &u16_val.to_be_bytes()[..],
        &u32_val.to_le_bytes(),
        &i32_val.to_le_bytes(),
        &u64_val.to_be_bytes(),
        &u64_val.to_le_bytes(),
        &encode_compact_size(blob.len() as u64),
        &blob,
    ];
    let encoded = parts.concat();

    let mut reader = ScriptReader::new(&encoded);
    assert_eq!(reader.read_u16_be(), Ok(u16_val));
    assert_eq!(reader.read_u32_le(), Ok(u32_val));
    assert_eq!(reader.read_i32_le(), Ok(i32_val));
    assert_eq!(reader.read_u64_be(), Ok(u64_val));
    assert_eq!(reader.read_u64_le(), Ok(u64_val));
    assert_eq!(reader.read_var_length_buffer().unwrap().as_ref(), &blob[..]);
    assert!(reader.at_end());
}

proptest! {
    #[test]
    fn prop_u64_le_be_agree(bytes: [u8; 8]) {
        let mut reversed = bytes;
        reversed.reverse();

        let le = ScriptReader::new(&bytes).read_u64_le();
        let be = ScriptReader::new(&reversed).read_u64_be();
        prop_assert_eq!(&le, &be);
        prop_assert_eq!(&le, &Ok(u64::from_le_bytes(bytes)));
    }

    #[test]
    fn prop_u64_le_around_2_pow_53(offset in -1000i64..1000) {
        let value = (1u64 << 53).wrapping_add_signed(offset);
        let bytes = value.to_le_bytes();
        prop_assert_eq!(ScriptReader::new(&bytes).read_u64_le(), Ok(value));
    }

    #[test]
    fn prop_varint_roundtrip(value: u64) {
        let encoded = encode_compact_size(value);
        let mut reader = ScriptReader::new(&encoded);
        prop_assert_eq!(reader.read_varint_num(), Ok(value));
        prop_assert!(reader.at_end());
    }

    #[test]
    fn prop_var_length_buffer(blob in gen_vec(any::<u8>(), 0..1000), trailer in gen_vec(any::<u8>(), 0..10)) {
        let encoded = [encode_compact_size(blob.len() as u64), blob.clone(), trailer.clone()].concat();
        let mut reader = ScriptReader::new(&encoded);
        let read_blob = reader.read_var_length_buffer().unwrap();
        prop_assert_eq!(read_blob.as_ref(), &blob[..]);
        let rest = reader.read_remaining();
        prop_assert_eq!(rest.as_ref(), &trailer[..]);
    }

    #[test]
    fn prop_concatenated_pushes(payloads in gen_vec(gen_vec(any::<u8>(), 0..300), 0..20)) {
        let encoded: Vec<u8> = payloads.iter().flat_map(|p| encode_push(p)).collect();
        let mut reader = ScriptReader::new(&encoded);
        let items = reader.decode_parts().collect::<crate::Result<Vec<_>>>().unwrap();

        prop_assert_eq!(items.len(), payloads.len());
        for (item, payload) in items.iter().zip(payloads.iter()) {
            prop_assert_eq!(item.data(), Some(&payload[..]));
        }
        prop_assert_eq!(reader.position(), encoded.len());
    }

    // Decoding garbage must never panic, and a failed read must not move the position.
    #[test]
    fn prop_garbage_does_not_panic(bytes in gen_vec(any::<u8>(), 0..200)) {
        let mut reader = ScriptReader::new(&bytes);
        loop {
            let before = reader.position();
            match reader.read_push_data() {
                Ok(_) => {
                    prop_assert!(reader.position() > before);
                }
                Err(_) => {
                    prop_assert_eq!(reader.position(), before);
                    break;
                }
            }
            if reader.at_end() {
                break;
            }
        }
        prop_assert!(reader.position() <= bytes.len());
    }

    #[test]
    fn prop_truncated_push_underruns(payload in gen_vec(any::<u8>(), 1..300), cut in 1usize..300) {
        let encoded = encode_push(&payload);
        let cut = cut.min(encoded.len() - 1);
        let truncated = &encoded[..encoded.len() - cut];

        let mut reader = ScriptReader::new(truncated);
        let result = reader.read_push_data();
        prop_assert!(matches!(result, Err(Error::BufferUnderrun { .. })), "{:?}", result);
        prop_assert_eq!(reader.position(), 0);
    }
}
