use sonv_core::codec::{decode, encode, parse_fragment, share_fragment, UNANSWERED};
use sonv_core::error::{CoreError, EncodingError};
use sonv_core::models::answer::{AnswerMap, AnswerValue};
use sonv_core::QUESTION_COUNT;

fn sample_answers() -> AnswerMap {
    AnswerMap::from_raw([(0, 4), (1, 0), (2, 3), (57, 2), (110, 1), (111, 4)])
        .expect("sample answers are in range")
}

#[test]
fn empty_map_encodes_to_all_sentinels() {
    let code = encode(&AnswerMap::new());
    assert_eq!(code.len(), QUESTION_COUNT);
    assert!(code.chars().all(|c| c == UNANSWERED));
}

#[test]
fn encodes_answers_in_id_order() {
    let code = encode(&sample_answers());
    assert_eq!(code.len(), QUESTION_COUNT);
    assert!(code.starts_with("403-"));
    assert!(code.ends_with("14"));
    assert_eq!(code.chars().nth(57), Some('2'));
}

#[test]
fn decode_restores_answered_ids_only() {
    let answers = sample_answers();
    let decoded = decode(&encode(&answers)).expect("round trip");
    assert_eq!(decoded, answers);
    assert_eq!(decoded.get(3), None);
}

#[test]
fn full_answer_sets_survive_the_round_trip() {
    let answers: AnswerMap = (0..QUESTION_COUNT as u32)
        .map(|id| (id, AnswerValue::ALL[(id as usize * 7) % AnswerValue::ALL.len()]))
        .collect();
    assert_eq!(decode(&encode(&answers)).expect("round trip"), answers);
}

#[test]
fn ids_outside_the_instrument_are_not_encoded() {
    let answers = AnswerMap::from_raw([(5, 2), (500, 3)]).expect("in range");
    let decoded = decode(&encode(&answers)).expect("round trip");
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded.get(5).map(AnswerValue::get), Some(2));
}

#[test]
fn short_code_is_rejected() {
    let code = "0".repeat(QUESTION_COUNT - 1);
    assert_eq!(
        decode(&code),
        Err(CoreError::InvalidEncoding(EncodingError::WrongLength {
            expected: QUESTION_COUNT,
            actual: QUESTION_COUNT - 1,
        }))
    );
}

#[test]
fn long_code_is_rejected() {
    let code = "1".repeat(QUESTION_COUNT + 1);
    assert!(matches!(
        decode(&code),
        Err(CoreError::InvalidEncoding(EncodingError::WrongLength { .. }))
    ));
}

#[test]
fn foreign_symbol_rejects_the_whole_code() {
    let mut code = "2".repeat(QUESTION_COUNT);
    code.replace_range(40..41, "5");
    assert_eq!(
        decode(&code),
        Err(CoreError::InvalidEncoding(EncodingError::UnknownSymbol {
            position: 40,
            symbol: '5',
        }))
    );
}

#[test]
fn multibyte_symbols_are_counted_as_one() {
    let code = format!("{}é", "0".repeat(QUESTION_COUNT - 1));
    assert!(matches!(
        decode(&code),
        Err(CoreError::InvalidEncoding(EncodingError::UnknownSymbol { position, .. }))
            if position == QUESTION_COUNT - 1
    ));
}

#[test]
fn fragments_carry_the_marker() {
    let answers = sample_answers();
    let fragment = share_fragment(&answers);
    assert!(fragment.starts_with("r="));
    assert_eq!(parse_fragment(&fragment).expect("plain fragment"), answers);
    assert_eq!(
        parse_fragment(&format!("#{fragment}")).expect("hash fragment"),
        answers
    );
}

#[test]
fn fragment_without_marker_is_rejected() {
    let code = encode(&sample_answers());
    assert!(matches!(
        parse_fragment(&code),
        Err(CoreError::InvalidEncoding(EncodingError::MissingMarker { .. }))
    ));
}
