//! Property tests: any plan with a registered band survives
//! encode-then-decode unchanged, and its text never carries nulls.

use freqplan_band::Band;
use freqplan_codec::{decode, encode, encode_to_string, Channel, FrequencyPlan, Lbt, Radio};
use proptest::prelude::*;

fn arb_band() -> impl Strategy<Value = String> {
    prop::sample::select(Band::all().to_vec()).prop_map(|band| band.as_str().to_string())
}

fn arb_channel() -> impl Strategy<Value = Channel> {
    (any::<u64>(), prop::option::of(any::<u32>())).prop_map(|(frequency, index)| {
        let channel = Channel::new(frequency);
        match index {
            Some(index) => channel.with_data_rate(index),
            None => channel,
        }
    })
}

fn arb_radio() -> impl Strategy<Value = Radio> {
    (any::<u64>(), prop::option::of((any::<u64>(), any::<u64>()))).prop_map(|(frequency, tx)| {
        let radio = Radio::new(frequency);
        match tx {
            Some((min, max)) => radio.with_tx(min, max),
            None => radio,
        }
    })
}

fn arb_lbt() -> impl Strategy<Value = Lbt> {
    (any::<i32>(), any::<u32>()).prop_map(|(rssi_target, scan_time)| Lbt {
        rssi_target,
        scan_time,
    })
}

fn arb_plan() -> impl Strategy<Value = FrequencyPlan> {
    (
        arb_band(),
        prop::option::of(arb_lbt()),
        prop::collection::vec(arb_channel(), 0..16),
        prop::collection::vec(arb_radio(), 0..4),
    )
        .prop_map(|(band_id, lbt, channels, radios)| FrequencyPlan {
            band_id,
            lbt,
            channels,
            radios,
        })
}

proptest! {
    #[test]
    fn value_round_trip(plan in arb_plan()) {
        prop_assert_eq!(decode(&encode(&plan)).unwrap(), plan);
    }

    #[test]
    fn text_round_trip(plan in arb_plan()) {
        let text = encode_to_string(&plan).unwrap();
        prop_assert!(!text.contains("null"));
        prop_assert_eq!(FrequencyPlan::from_yaml_str(&text).unwrap(), plan);
    }
}
