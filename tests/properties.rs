//! Invariants of the editing core under arbitrary edit sequences.

use proptest::prelude::*;
use ratatui::{buffer::Buffer, layout::Rect};
use tui_inputs::tui::viewport::columns;
use tui_inputs::{InputField, InputWidget, IntegerInput, KeyInput, TextInput};

#[derive(Debug, Clone)]
enum Op {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Width(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop::char::range('a', 'z').prop_map(Op::Insert),
        1 => Just('é').prop_map(Op::Insert),
        1 => Just('日').prop_map(Op::Insert),
        2 => Just(Op::Backspace),
        1 => Just(Op::Delete),
        2 => Just(Op::Left),
        2 => Just(Op::Right),
        1 => Just(Op::Home),
        1 => Just(Op::End),
        1 => (0usize..30).prop_map(Op::Width),
    ]
}

fn apply(field: &mut InputField, op: &Op) {
    match *op {
        Op::Insert(c) => {
            field.handle_char(c);
        }
        Op::Backspace => {
            field.handle_backspace();
        }
        Op::Delete => {
            field.handle_delete();
        }
        Op::Left => {
            field.move_cursor_left();
        }
        Op::Right => {
            field.move_cursor_right();
        }
        Op::Home => {
            field.move_cursor_home();
        }
        Op::End => {
            field.move_cursor_end();
        }
        Op::Width(width) => field.set_width(width),
    }
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds_and_visible(
        ops in prop::collection::vec(op(), 0..200),
        margin in 0usize..8,
    ) {
        let mut field = InputField::new();
        field.set_edge_margin(margin);
        for op in &ops {
            apply(&mut field, op);
            prop_assert!(field.cursor() <= field.len());

            let viewport = field.viewport();
            if let Some(width) = viewport.width() {
                prop_assert!(viewport.offset() <= field.cursor());
                prop_assert!(viewport.cursor_column(field.chars(), field.cursor()) <= width);
                let range = viewport.visible_range(field.chars());
                prop_assert!(columns(&field.chars()[range]) <= width);
            } else {
                prop_assert_eq!(viewport.offset(), 0);
            }
        }
    }

    #[test]
    fn insert_then_backspace_restores_value_and_cursor(
        ops in prop::collection::vec(op(), 0..60),
        c in prop::char::range('!', '~'),
    ) {
        let mut field = InputField::new();
        for op in &ops {
            apply(&mut field, op);
        }
        let value = field.value();
        let cursor = field.cursor();

        prop_assert!(field.handle_char(c));
        prop_assert_eq!(field.len(), value.chars().count() + 1);
        prop_assert!(field.handle_backspace());
        prop_assert_eq!(field.value(), value);
        prop_assert_eq!(field.cursor(), cursor);
    }

    #[test]
    fn rendering_does_not_change_state(
        text in "[a-z ]{0,80}",
        moves in 0usize..80,
        width in 4u16..40,
    ) {
        let mut input = TextInput::named("prop").value(&text);
        input.resize(40);
        input.focus();
        for _ in 0..moves {
            input.handle_key(KeyInput::Left);
        }
        let before = input.field().clone();

        let area = Rect::new(0, 0, width, 3);
        let mut first = Buffer::empty(area);
        input.render_input(area, &mut first);
        let mut second = Buffer::empty(area);
        input.render_input(area, &mut second);

        prop_assert_eq!(first, second);
        prop_assert_eq!(input.field(), &before);
    }

    #[test]
    fn focused_segments_show_the_visible_slice_around_the_cursor(
        text in "[a-z日]{0,60}",
        moves in 0usize..60,
        width in 3u16..30,
    ) {
        let mut input = TextInput::named("prop").value(&text);
        input.resize(width);
        input.focus();
        for _ in 0..moves {
            input.handle_key(KeyInput::Left);
        }

        let segments = input.segments();
        prop_assert_eq!(segments.iter().filter(|s| s.is_cursor()).count(), 1);
        let shown: String = segments
            .iter()
            .filter(|s| !s.is_cursor())
            .map(|s| s.text())
            .collect();
        let field = input.field();
        let range = field.viewport().visible_range(field.chars());
        let expected: String = field.chars()[range].iter().collect();
        prop_assert_eq!(shown, expected);
    }

    #[test]
    fn integer_edits_always_leave_a_parseable_value(
        keys in prop::collection::vec(
            prop_oneof![
                prop::char::range('0', '9').prop_map(KeyInput::Char),
                Just(KeyInput::Char('-')),
                Just(KeyInput::Char('x')),
                Just(KeyInput::Backspace),
                Just(KeyInput::Delete),
                Just(KeyInput::Left),
                Just(KeyInput::Right),
                Just(KeyInput::Home),
                Just(KeyInput::Up),
                Just(KeyInput::Down),
            ],
            0..40,
        ),
    ) {
        let mut input = IntegerInput::named("n");
        for key in keys {
            input.handle_key(key);
            let text = input.text();
            prop_assert!(input.cursor() <= text.len());
            prop_assert_eq!(text.parse::<i64>().ok(), input.current());
        }
    }
}
