// Keyboard-driven editing scenarios

mod common;

use common::{editor, press, press_event, session, texts, RecordingHost, SECOND};
use transcript_editor::host::AnalyticsEvent;
use transcript_editor::{KeyEvent, KeyOutcome, Marker, Role};

#[test]
fn test_punctuation_toggles_and_recases_next_word() {
    let mut session = editor();
    session.select_word(0, 1).unwrap();

    assert_eq!(press(&mut session, "."), KeyOutcome::Handled);
    assert_eq!(texts(&session, 0), vec!["hello", "world.", "Again"]);
    // The re-cased word joins the selection
    assert_eq!(session.marker(), Some(Marker::new(0, 1, 2)));

    session.select_word(0, 1).unwrap();
    press(&mut session, ".");
    assert_eq!(texts(&session, 0), vec!["hello", "world", "again"]);
    assert_eq!(session.marker(), Some(Marker::new(0, 1, 2)));

    // Timing never moves for punctuation
    let word = &session.transcript().unwrap().grid().paragraphs()[0].words[1];
    assert_eq!((word.start_time, word.end_time), (SECOND, 2 * SECOND));
}

#[test]
fn test_punctuation_without_recase_keeps_single_word() {
    let mut session = editor();
    session.select_word(0, 2).unwrap();
    press(&mut session, "!");
    assert_eq!(texts(&session, 0), vec!["hello", "world", "again!"]);
    assert_eq!(session.marker(), Some(Marker::word(0, 2)));

    session.select_word(1, 0).unwrap();
    press(&mut session, ",");
    assert_eq!(texts(&session, 1), vec!["cat,", "sat"]);
    assert_eq!(session.marker(), Some(Marker::word(1, 0)));
}

#[test]
fn test_enter_type_enter_corrects_word() {
    let mut session = editor();
    session.select_word(1, 0).unwrap();

    press(&mut session, "Enter");
    assert!(session.is_editing());
    press(&mut session, "s");
    assert_eq!(texts(&session, 1), vec!["cat", "sat"]);
    press(&mut session, "Enter");

    assert!(!session.is_editing());
    assert_eq!(texts(&session, 1), vec!["cats", "sat"]);
    assert_eq!(session.marker(), Some(Marker::word(1, 0)));
    assert!(session.host().pauses >= 1);
    assert_eq!(session.host().events, vec![AnalyticsEvent::WordsChanged]);
}

#[test]
fn test_typing_opens_buffer_and_escape_discards() {
    let mut session = editor();
    session.select_word(0, 1).unwrap();

    press(&mut session, "x");
    assert_eq!(session.buffer().unwrap().words(), ["worldx".to_string()]);

    press(&mut session, "Escape");
    assert!(!session.is_editing());
    assert_eq!(texts(&session, 0), vec!["hello", "world", "again"]);
    assert!(!session.can_undo());
}

#[test]
fn test_space_splits_word_at_cursor() {
    let mut session = editor();
    session.select_word(0, 0).unwrap();

    press(&mut session, "Enter");
    press(&mut session, "ArrowLeft");
    press(&mut session, "ArrowLeft");
    press(&mut session, " ");

    assert!(session.is_editing());
    assert_eq!(texts(&session, 0), vec!["hel", "lo", "world", "again"]);
    assert_eq!(session.marker(), Some(Marker::new(0, 0, 1)));

    let words = &session.transcript().unwrap().grid().paragraphs()[0].words;
    assert_eq!(words[0].start_time, 0);
    assert_eq!(words[0].end_time, words[1].start_time);
    assert_eq!(words[1].end_time, SECOND);

    press(&mut session, "Enter");
    assert!(!session.is_editing());
    assert_eq!(texts(&session, 0), vec!["hel", "lo", "world", "again"]);
}

#[test]
fn test_space_without_buffer_toggles_playback() {
    let mut session = editor();
    session.select_word(0, 0).unwrap();
    press(&mut session, " ");
    assert_eq!(session.host().toggles, 1);
    assert!(!session.can_undo());
}

#[test]
fn test_join_paragraphs_with_ctrl_backspace() {
    let mut session = editor();
    session.select_word(1, 0).unwrap();

    press_event(&mut session, KeyEvent::new("Backspace").with_ctrl());

    let grid = session.transcript().unwrap().grid();
    assert_eq!(grid.paragraph_count(), 1);
    assert_eq!(texts(&session, 0), vec!["hello", "world", "again", "cat", "sat"]);
    assert_eq!(session.marker(), Some(Marker::word(0, 3)));
}

#[test]
fn test_split_then_join_restores_paragraph() {
    let mut session = editor();
    session.select_word(0, 1).unwrap();

    press_event(&mut session, KeyEvent::new("Enter").with_meta());
    assert_eq!(session.transcript().unwrap().grid().paragraph_count(), 3);
    assert_eq!(texts(&session, 0), vec!["hello"]);
    assert_eq!(texts(&session, 1), vec!["world", "again"]);
    assert_eq!(session.marker(), Some(Marker::word(1, 0)));

    press_event(&mut session, KeyEvent::new("Backspace").with_ctrl());
    assert_eq!(session.transcript().unwrap().grid().paragraph_count(), 2);
    assert_eq!(texts(&session, 0), vec!["hello", "world", "again"]);
    assert_eq!(session.marker(), Some(Marker::word(0, 1)));
}

#[test]
fn test_shift_selection_and_dash_join() {
    let mut session = editor();
    session.select_word(0, 0).unwrap();

    press_event(&mut session, KeyEvent::new("ArrowRight").with_shift());
    press_event(&mut session, KeyEvent::new("ArrowRight").with_shift());
    assert_eq!(session.marker(), Some(Marker::new(0, 0, 2)));

    press(&mut session, "-");
    assert_eq!(texts(&session, 0), vec!["helloworldagain"]);
    assert_eq!(session.marker(), Some(Marker::word(0, 0)));
}

#[test]
fn test_delete_strikes_marked_range() {
    let mut session = editor();
    session.select_word(0, 1).unwrap();
    press_event(&mut session, KeyEvent::new("ArrowRight").with_shift());

    press(&mut session, "Delete");

    let words = &session.transcript().unwrap().grid().paragraphs()[0].words;
    assert!(!words[0].deleted);
    assert!(words[1].deleted && words[2].deleted);
    assert_eq!(session.host().events, vec![AnalyticsEvent::WordsDeleted]);
}

#[test]
fn test_arrows_cross_paragraphs() {
    let mut session = editor();
    session.select_word(0, 2).unwrap();

    press(&mut session, "ArrowRight");
    assert_eq!(session.marker(), Some(Marker::word(1, 0)));
    press(&mut session, "ArrowLeft");
    assert_eq!(session.marker(), Some(Marker::word(0, 2)));
    press(&mut session, "ArrowUp");
    assert_eq!(session.marker(), Some(Marker::word(0, 0)));
    press(&mut session, "ArrowDown");
    assert_eq!(session.marker(), Some(Marker::word(1, 0)));

    // Navigation seeks the player to the new word
    assert_eq!(session.host().seeks.last(), Some(&4.0));
}

#[test]
fn test_viewer_can_only_navigate() {
    let mut session = session(Role::Viewer, RecordingHost::default());

    assert_eq!(press(&mut session, "ArrowRight"), KeyOutcome::Handled);
    assert_eq!(session.marker(), Some(Marker::word(0, 0)));
    assert_eq!(press(&mut session, "ArrowRight"), KeyOutcome::Handled);
    assert_eq!(session.marker(), Some(Marker::word(0, 1)));

    assert_eq!(press(&mut session, "x"), KeyOutcome::Rejected);
    assert_eq!(press(&mut session, "Delete"), KeyOutcome::Rejected);
    assert_eq!(
        press_event(&mut session, KeyEvent::new("z").with_ctrl()),
        KeyOutcome::Rejected
    );
    assert_eq!(texts(&session, 0), vec!["hello", "world", "again"]);
    assert!(!session.can_undo());
}

#[test]
fn test_assign_speaker_prompts_once_per_speaker() {
    let mut session = session(Role::Editor, RecordingHost::answering(&[Some("  Alice ")]));
    session.select_word(0, 0).unwrap();

    press_event(&mut session, KeyEvent::new("2").with_ctrl());
    let transcript = session.transcript().unwrap();
    assert_eq!(transcript.speaker_name(2), Some("Alice"));
    assert_eq!(transcript.grid().paragraphs()[0].speaker, Some(2));
    assert_eq!(session.host().prompts, vec![("Name of speaker 2:".to_string(), None)]);

    session.select_word(1, 0).unwrap();
    press_event(&mut session, KeyEvent::new("2").with_ctrl());
    assert_eq!(session.transcript().unwrap().grid().paragraphs()[1].speaker, Some(2));
    assert_eq!(session.host().prompts.len(), 1);

    // Name and speaker came in one revision
    session.undo();
    session.undo();
    let transcript = session.transcript().unwrap();
    assert_eq!(transcript.speaker_name(2), None);
    assert_eq!(transcript.grid().paragraphs()[0].speaker, None);
}

#[test]
fn test_cancelled_speaker_prompt_changes_nothing() {
    let mut session = session(Role::Editor, RecordingHost::answering(&[None]));
    session.select_word(0, 0).unwrap();

    let outcome = press_event(&mut session, KeyEvent::new("1").with_ctrl());
    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(session.transcript().unwrap().grid().paragraphs()[0].speaker, None);
    assert!(!session.can_undo());
}

#[test]
fn test_wrap_marked_word_in_parentheses() {
    let mut session = editor();
    session.select_word(1, 1).unwrap();
    press(&mut session, "(");
    assert_eq!(texts(&session, 1), vec!["cat", "(sat)"]);
}

#[test]
fn test_tab_toggles_case() {
    let mut session = editor();
    session.select_word(0, 0).unwrap();
    press(&mut session, "Tab");
    assert_eq!(texts(&session, 0)[0], "Hello");
    press(&mut session, "Tab");
    assert_eq!(texts(&session, 0)[0], "hello");
}

#[test]
fn test_join_two_single_word_paragraphs() {
    use transcript_editor::{EditorConfig, EditorSession, Paragraph, Transcript, Word};

    let mut session = EditorSession::new(EditorConfig::default(), Role::Editor, RecordingHost::default());
    session.load_transcript(Transcript::new(
        "t2",
        vec![
            Paragraph::new("p1", vec![Word::new("Hi", 0, SECOND)]),
            Paragraph::new("p2", vec![Word::new("there", SECOND, 2 * SECOND)]),
        ],
    ));
    session.select_word(1, 0).unwrap();

    press_event(&mut session, KeyEvent::new("Backspace").with_ctrl());

    assert_eq!(texts(&session, 0), vec!["Hi", "there"]);
    assert_eq!(session.marker(), Some(Marker::word(0, 1)));
    assert_eq!(session.host().events, vec![AnalyticsEvent::ParagraphsJoined]);
}

#[test]
fn test_buffer_cursor_tracks_typing() {
    let mut session = editor();
    session.select_word(1, 0).unwrap();

    press(&mut session, "Enter");
    let cursor = session.buffer().unwrap().cursor();
    assert_eq!((cursor.word, cursor.offset), (0, 3));

    press(&mut session, "s");
    let buffer = session.buffer().unwrap();
    assert_eq!(buffer.words(), ["cats".to_string()]);
    assert_eq!(buffer.cursor().offset, 4);
}

#[test]
fn test_backspace_outside_buffer_strikes_marked_words() {
    let mut session = editor();
    session.select_word(0, 1).unwrap();

    assert_eq!(press(&mut session, "Backspace"), KeyOutcome::Handled);

    let deleted: Vec<bool> = session.transcript().unwrap().grid().paragraphs()[0]
        .words
        .iter()
        .map(|w| w.deleted)
        .collect();
    assert_eq!(deleted, vec![false, true, false]);
    assert!(!session.is_editing());
    assert_eq!(session.host().events, vec![AnalyticsEvent::WordsDeleted]);
}

#[test]
fn test_backspace_in_buffer_deletes_previous_char() {
    let mut session = editor();
    session.select_word(0, 0).unwrap();

    press(&mut session, "Enter");
    press(&mut session, "Backspace");
    assert_eq!(session.buffer().unwrap().words(), ["hell".to_string()]);
    assert_eq!(session.buffer().unwrap().cursor().offset, 4);

    press(&mut session, "Enter");
    assert_eq!(texts(&session, 0), vec!["hell", "world", "again"]);
}

#[test]
fn test_backspace_at_word_start_merges_split_words() {
    let mut session = editor();
    session.select_word(0, 0).unwrap();

    press(&mut session, "Enter");
    press(&mut session, "ArrowLeft");
    press(&mut session, "ArrowLeft");
    press(&mut session, " ");
    assert_eq!(texts(&session, 0), vec!["hel", "lo", "world", "again"]);

    press(&mut session, "Backspace");
    let buffer = session.buffer().unwrap();
    assert_eq!(buffer.words(), ["hello".to_string()]);
    assert_eq!((buffer.cursor().word, buffer.cursor().offset), (0, 3));

    press(&mut session, "Enter");
    assert_eq!(texts(&session, 0), vec!["hello", "world", "again"]);
    assert_eq!(session.marker(), Some(Marker::word(0, 0)));
}

#[test]
fn test_typing_over_range_rewrites_all_marked_words() {
    let mut session = editor();
    session.select_word(0, 0).unwrap();
    press_event(&mut session, KeyEvent::new("ArrowRight").with_shift());
    assert_eq!(session.marker(), Some(Marker::new(0, 0, 1)));

    press(&mut session, "s");
    let buffer = session.buffer().unwrap();
    assert_eq!(buffer.words(), ["hello".to_string(), "worlds".to_string()]);
    assert_eq!((buffer.cursor().word, buffer.cursor().offset), (1, 6));

    press(&mut session, "Enter");
    assert!(!session.is_editing());
    assert_eq!(texts(&session, 0), vec!["hello", "worlds", "again"]);
    assert_eq!(session.marker(), Some(Marker::new(0, 0, 1)));

    // Same word count keeps the original timing
    let words = &session.transcript().unwrap().grid().paragraphs()[0].words;
    assert_eq!((words[1].start_time, words[1].end_time), (SECOND, 2 * SECOND));
}
