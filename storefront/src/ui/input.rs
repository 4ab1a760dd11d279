//! Key bindings
//!
//! Maps a key press to an [`Action`] for the current view. The quantity
//! field is the only widget with its own editing state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::core::{Action, StorefrontState};
use crate::navigation::{OrderingView, Page, Panel};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    Quit,
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Command::Dispatch(action)
    }
}

/// Translate `key` for the current view; `None` means nothing to do
pub fn map_key(state: &StorefrontState, quantity: &mut Input, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    if key.code == KeyCode::Tab {
        quantity.reset();
        return Some(Action::TogglePage.into());
    }

    let nav = state.nav();
    match (nav.page, nav.view) {
        (Page::Menu, _) => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        },
        (Page::Ordering, OrderingView::Selected(id)) => match key.code {
            KeyCode::Esc => {
                quantity.reset();
                Some(Action::ReturnToMenu.into())
            }
            KeyCode::Enter => {
                // Anything unparsable is handed on as NaN and rejected downstream
                let requested = quantity.value().trim().parse::<f64>().unwrap_or(f64::NAN);
                quantity.reset();
                Some(
                    Action::OrderFood {
                        id,
                        quantity: requested,
                    }
                    .into(),
                )
            }
            _ => {
                quantity.handle_event(&Event::Key(key));
                None
            }
        },
        (Page::Ordering, OrderingView::Browse) => map_browse_key(state, key),
    }
}

fn map_browse_key(state: &StorefrontState, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Right => return Some(Action::FocusNext.into()),
        KeyCode::Left => return Some(Action::FocusPrev.into()),
        KeyCode::Up | KeyCode::Char('k') => return Some(Action::MoveUp.into()),
        KeyCode::Down | KeyCode::Char('j') => return Some(Action::MoveDown.into()),
        _ => {}
    }

    match (state.nav().focus, key.code) {
        (Panel::Foods, KeyCode::Enter) => state
            .highlighted_food()
            .map(|food| Action::SelectFood(food.id).into()),
        (Panel::Cart, KeyCode::Char('x') | KeyCode::Delete) => state
            .highlighted_cart_line()
            .map(|line| Action::RemoveFromCart(line.id).into()),
        (Panel::Orders, KeyCode::Char('p')) => state
            .highlighted_order()
            .map(|order| Action::MarkPaid(order.id.clone()).into()),
        (Panel::Orders, KeyCode::Char('d') | KeyCode::Delete) => state
            .highlighted_order()
            .map(|order| Action::DeleteOrder(order.id.clone()).into()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::testing::ManualFeed;
    use shared::models::{Order, OrderStatus};
    use std::sync::Arc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ordering_state() -> (StorefrontState, Arc<ManualFeed>) {
        let feed = Arc::new(ManualFeed::default());
        let mut state = StorefrontState::new(feed.clone());
        state.mount();
        state.dispatch(Action::TogglePage);
        (state, feed)
    }

    /// Feed every resulting action back into the state
    fn apply(state: &mut StorefrontState, input: &mut Input, code: KeyCode) -> Option<Command> {
        let command = map_key(state, input, press(code));
        if let Some(Command::Dispatch(action)) = &command {
            state.dispatch(action.clone());
        }
        command
    }

    #[test]
    fn test_quit_keys() {
        let feed = Arc::new(ManualFeed::default());
        let state = StorefrontState::new(feed);
        let mut input = Input::default();

        assert_eq!(
            map_key(&state, &mut input, press(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
        assert_eq!(
            map_key(
                &state,
                &mut input,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Command::Quit)
        );
        assert_eq!(
            map_key(&state, &mut input, press(KeyCode::Tab)),
            Some(Command::Dispatch(Action::TogglePage))
        );
    }

    #[test]
    fn test_select_and_order_by_typing() {
        let (mut state, _feed) = ordering_state();
        let mut input = Input::default();

        apply(&mut state, &mut input, KeyCode::Enter);
        assert_eq!(state.selected_food().map(|f| f.id), Some(1));

        // Typing in the detail view does not quit
        assert_eq!(apply(&mut state, &mut input, KeyCode::Char('q')), None);
        input.reset();
        apply(&mut state, &mut input, KeyCode::Char('5'));
        assert_eq!(input.value(), "5");

        assert_eq!(
            apply(&mut state, &mut input, KeyCode::Enter),
            Some(Command::Dispatch(Action::OrderFood {
                id: 1,
                quantity: 5.0
            }))
        );
        assert_eq!(input.value(), "");
        assert_eq!(state.menu().stock(1), Some(35));
        assert_eq!(state.cart().quantity_of(1), 5);
    }

    #[test]
    fn test_garbage_quantity_is_rejected() {
        let (mut state, _feed) = ordering_state();
        let mut input = Input::default();
        apply(&mut state, &mut input, KeyCode::Enter);

        apply(&mut state, &mut input, KeyCode::Char('a'));
        match apply(&mut state, &mut input, KeyCode::Enter) {
            Some(Command::Dispatch(Action::OrderFood { quantity, .. })) => {
                assert!(quantity.is_nan())
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(state.menu().stock(1), Some(40));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_esc_returns_to_foods() {
        let (mut state, _feed) = ordering_state();
        let mut input = Input::default();
        apply(&mut state, &mut input, KeyCode::Enter);
        apply(&mut state, &mut input, KeyCode::Char('3'));

        assert_eq!(
            apply(&mut state, &mut input, KeyCode::Esc),
            Some(Command::Dispatch(Action::ReturnToMenu))
        );
        assert!(state.nav().is_browsing());
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_remove_highlighted_cart_line() {
        let (mut state, _feed) = ordering_state();
        let mut input = Input::default();
        state.dispatch(Action::OrderFood { id: 2, quantity: 4.0 });

        // Nothing to remove while the foods panel has focus
        assert_eq!(apply(&mut state, &mut input, KeyCode::Char('x')), None);

        apply(&mut state, &mut input, KeyCode::Right);
        assert_eq!(
            apply(&mut state, &mut input, KeyCode::Char('x')),
            Some(Command::Dispatch(Action::RemoveFromCart(2)))
        );
        assert!(state.cart().is_empty());
        assert_eq!(state.menu().stock(2), Some(20));
    }

    #[test]
    fn test_order_panel_keys() {
        let (mut state, feed) = ordering_state();
        let mut input = Input::default();
        feed.push(vec![Order {
            id: "17".to_string(),
            status: OrderStatus::Pending,
            total: 48.0,
            created_at: 0,
        }]);
        state.pump_feed();

        apply(&mut state, &mut input, KeyCode::Left);
        assert_eq!(state.nav().focus, Panel::Orders);

        assert_eq!(
            apply(&mut state, &mut input, KeyCode::Char('p')),
            Some(Command::Dispatch(Action::MarkPaid("17".to_string())))
        );
        assert_eq!(
            apply(&mut state, &mut input, KeyCode::Char('d')),
            Some(Command::Dispatch(Action::DeleteOrder("17".to_string())))
        );
        assert_eq!(feed.deletes(), vec!["17".to_string()]);
    }

    #[test]
    fn test_empty_orders_panel_ignores_keys() {
        let (mut state, _feed) = ordering_state();
        let mut input = Input::default();
        apply(&mut state, &mut input, KeyCode::Left);

        assert_eq!(apply(&mut state, &mut input, KeyCode::Char('p')), None);
        assert_eq!(apply(&mut state, &mut input, KeyCode::Delete), None);
    }
}
