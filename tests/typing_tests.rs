// Host-side tests for the typing text loop.

use site_web::constants::{
    DELETE_CHAR_MS, PAUSE_AT_EMPTY_MS, PAUSE_AT_FULL_MS, TYPE_CHAR_MS, TYPING_PHRASES,
};
use site_web::core::scheduler::LoopHandle;
use site_web::core::timers::ManualTimers;
use site_web::core::typing::{start_typing, TypingMachine, TypingStep};
use std::cell::RefCell;
use std::rc::Rc;

/// Step until the machine asks for `delay`, returning that step.
fn step_until(m: &mut TypingMachine, delay: u32) -> TypingStep {
    for _ in 0..1000 {
        let s = m.step().expect("non-empty phrase list");
        if s.delay_ms == delay {
            return s;
        }
    }
    panic!("machine never produced a {delay}ms delay");
}

#[test]
fn types_one_character_per_step() {
    let mut m = TypingMachine::new(TYPING_PHRASES);
    let first = m.step().unwrap();
    assert_eq!(first.text, "P");
    assert_eq!(first.delay_ms, TYPE_CHAR_MS);
    assert_eq!(m.step().unwrap().text, "Pr");
    assert_eq!(m.state().char_index, 2);
    assert!(!m.state().is_deleting);
}

#[test]
fn pauses_at_full_phrase_then_deletes() {
    let mut m = TypingMachine::new(TYPING_PHRASES);
    let full = step_until(&mut m, PAUSE_AT_FULL_MS);
    assert_eq!(full.text, "Premium Applications");
    assert!(m.state().is_deleting);

    let del = m.step().unwrap();
    assert_eq!(del.text, "Premium Application");
    assert_eq!(del.delay_ms, DELETE_CHAR_MS);
}

#[test]
fn pause_at_empty_advances_phrase() {
    let mut m = TypingMachine::new(TYPING_PHRASES);
    step_until(&mut m, PAUSE_AT_FULL_MS);
    let empty = step_until(&mut m, PAUSE_AT_EMPTY_MS);
    assert_eq!(empty.text, "");
    let st = m.state();
    assert_eq!(st.phrase_index, 1);
    assert_eq!(st.char_index, 0);
    assert!(!st.is_deleting);
}

#[test]
fn full_cycle_lands_on_next_phrase_in_order_and_wraps() {
    let mut m = TypingMachine::new(TYPING_PHRASES);
    for round in 0..(TYPING_PHRASES.len() * 2) {
        let expected = TYPING_PHRASES[round % TYPING_PHRASES.len()];
        let full = step_until(&mut m, PAUSE_AT_FULL_MS);
        assert_eq!(full.text, expected, "round {round}");
        step_until(&mut m, PAUSE_AT_EMPTY_MS);
        assert_eq!(
            m.state().phrase_index,
            (round + 1) % TYPING_PHRASES.len(),
            "round {round}"
        );
    }
}

#[test]
fn empty_phrase_does_not_stall() {
    let mut m = TypingMachine::new(["", "ok"]);
    let s = m.step().unwrap();
    assert_eq!(s.text, "");
    assert_eq!(s.delay_ms, PAUSE_AT_FULL_MS);
    let s = m.step().unwrap();
    assert_eq!(s.delay_ms, PAUSE_AT_EMPTY_MS);
    assert_eq!(m.state().phrase_index, 1);
    assert_eq!(m.step().unwrap().text, "o");
}

#[test]
fn empty_phrase_list_yields_nothing() {
    let mut m = TypingMachine::new(Vec::<String>::new());
    assert!(m.step().is_none());
}

#[test]
fn multibyte_phrases_slice_on_characters() {
    let mut m = TypingMachine::new(["héllo ✓"]);
    let texts: Vec<String> = (0..7).map(|_| m.step().unwrap().text).collect();
    assert_eq!(texts[1], "hé");
    assert_eq!(texts[6], "héllo ✓");
}

#[test]
fn timer_loop_follows_step_delays_until_stopped() {
    let timers = Rc::new(ManualTimers::new());
    let shown = Rc::new(RefCell::new(Vec::<String>::new()));
    let handle = LoopHandle::new();

    let s = shown.clone();
    start_typing(
        timers.clone(),
        TypingMachine::new(TYPING_PHRASES),
        1000,
        handle.clone(),
        move |t| s.borrow_mut().push(t.to_owned()),
    );

    timers.advance(999);
    assert!(shown.borrow().is_empty());
    timers.advance(1);
    assert_eq!(shown.borrow().last().map(String::as_str), Some("P"));
    timers.advance(u64::from(TYPE_CHAR_MS));
    assert_eq!(shown.borrow().last().map(String::as_str), Some("Pr"));

    handle.stop();
    let n = shown.borrow().len();
    timers.advance(60_000);
    assert_eq!(shown.borrow().len(), n);
    assert_eq!(timers.active(), 0);
}
