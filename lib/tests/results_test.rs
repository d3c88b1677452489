#[macro_use]
extern crate assert_matches;

use wordle_elimination::LetterStatus::*;
use wordle_elimination::*;

use std::result::Result;

#[test]
fn get_result_for_guess_correct() -> Result<(), WordleError> {
    let result = get_result_for_guess("abcb", "abcb")?;

    assert_eq!(result.guess, "abcb");
    assert_eq!(result.results, vec![CorrectPosition; 4]);
    assert!(result.is_solved());
    Ok(())
}

#[test]
fn get_result_for_guess_partial() -> Result<(), WordleError> {
    let result = get_result_for_guess("piano", "amino")?;
    assert_eq!(
        result.results,
        vec![WrongPosition, Absent, WrongPosition, CorrectPosition, CorrectPosition]
    );
    assert!(!result.is_solved());

    let result = get_result_for_guess("mesas", "sassy")?;
    assert_eq!(
        result.results,
        vec![WrongPosition, WrongPosition, CorrectPosition, Absent, Absent]
    );

    let result = get_result_for_guess("abba", "babb")?;
    assert_eq!(
        result.results,
        vec![WrongPosition, WrongPosition, CorrectPosition, Absent]
    );
    Ok(())
}

#[test]
fn get_result_for_guess_wrong_length() {
    assert_matches!(
        get_result_for_guess("abcd", "abc"),
        Err(WordleError::WordLength(4))
    );
}

#[test]
fn percept_from_result() -> Result<(), WordleError> {
    let alphabet = Alphabet::english();
    let result = get_result_for_guess("cab", "bad")?;

    let percept = Percept::from_result(3, &result, &alphabet)?;

    assert_eq!(
        percept,
        Percept {
            round: 3,
            letter_indices: vec![1, 0, 3],
            statuses: vec![-1, 1, 0],
        }
    );
    assert_eq!(
        percept.letter_statuses(3)?,
        vec![WrongPosition, CorrectPosition, Absent]
    );
    Ok(())
}

#[test]
fn percept_from_result_unsupported_letter() -> Result<(), WordleError> {
    let result = get_result_for_guess("ab!", "ab!")?;

    assert_matches!(
        Percept::from_result(1, &result, &Alphabet::english()),
        Err(WordleError::UnsupportedCharacter('!'))
    );
    Ok(())
}
