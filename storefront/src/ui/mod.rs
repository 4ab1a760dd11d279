//! Presentation layer
//!
//! Pure rendering of [`StorefrontState`] with ratatui. Nothing here mutates
//! state; key handling lives in [`input`], the panic guard in [`boundary`].

pub mod boundary;
pub mod input;

use ratatui::layout::Margin;
use ratatui::{prelude::*, widgets::*};
use shared::models::{MenuItem, Order};
use tui_input::Input;

use crate::core::StorefrontState;
use crate::navigation::{OrderingView, Page, Panel};
use crate::order_money;

pub use boundary::ErrorBoundary;
pub use input::{Command, map_key};

const TITLE: &str = "Fast Food Online";

/// Draw the whole storefront into `area`
pub fn render(f: &mut Frame, area: Rect, state: &StorefrontState, quantity: &Input) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(f, chunks[0], state);

    match state.nav().page {
        Page::Menu => render_menu_page(f, chunks[1], state),
        Page::Ordering => render_ordering_page(f, chunks[1], state, quantity),
    }

    let hints = Paragraph::new(key_hints(state)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[2]);
}

/// Human-readable position in the view tree, for error reports
pub fn render_path(state: &StorefrontState) -> String {
    let nav = state.nav();
    match (nav.page, nav.view) {
        (Page::Menu, _) => "Storefront > Menu".to_string(),
        (Page::Ordering, OrderingView::Browse) => "Storefront > Ordering > Foods".to_string(),
        (Page::Ordering, OrderingView::Selected(id)) => {
            format!("Storefront > Ordering > FoodOrder(id={})", id)
        }
    }
}

fn render_header(f: &mut Frame, area: Rect, state: &StorefrontState) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);

    // Toggle "button" on the right side of the header
    let toggle = Paragraph::new(format!("[Tab] {} ", state.nav().page.toggle_label()))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Right);
    f.render_widget(toggle, area.inner(Margin::new(1, 1)));
}

fn render_menu_page(f: &mut Frame, area: Rect, state: &StorefrontState) {
    let items: Vec<ListItem> = state
        .menu()
        .items()
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", item.name)),
                Span::styled(format!("#{}", item.quantity), stock_style(item)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Menus ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(list, area);
}

fn render_ordering_page(f: &mut Frame, area: Rect, state: &StorefrontState, quantity: &Input) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(9)])
        .split(area);

    match state.selected_food() {
        Some(food) => render_food_order(f, rows[0], food, quantity),
        None => render_foods(f, rows[0], state),
    }

    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_cart(f, boxes[0], state);
    render_orders(f, boxes[1], state);
}

fn render_foods(f: &mut Frame, area: Rect, state: &StorefrontState) {
    let items: Vec<ListItem> = state
        .menu()
        .items()
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        item.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {}$  ", money(item.price))),
                    Span::styled(format!("#{}", item.quantity), stock_style(item)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", item.description),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let nav = state.nav();
    let list = List::new(items)
        .block(panel_block(" Foods ", nav.focus == Panel::Foods))
        .highlight_symbol("> ")
        .highlight_style(Style::default().fg(Color::Yellow));
    let mut list_state = ListState::default().with_selected(Some(nav.food_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_food_order(f: &mut Frame, area: Rect, food: &MenuItem, quantity: &Input) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let detail = vec![
        Line::from(Span::styled(
            food.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(food.description.clone()),
        Line::from(vec![
            Span::raw("Price: "),
            Span::styled(format!("{}$", money(food.price)), Style::default().fg(Color::Cyan)),
            Span::raw("   In stock: "),
            Span::styled(format!("#{}", food.quantity), stock_style(food)),
        ]),
        Line::from(Span::styled(
            format!("Image: {}", food.image),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(detail)
        .block(panel_block(" Order ", true))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, chunks[0]);

    let input_area = chunks[1];
    let width = input_area.width.max(3) - 3;
    let scroll = quantity.visual_scroll(width as usize);
    let input = Paragraph::new(quantity.value())
        .style(Style::default().fg(Color::Yellow))
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quantity (Enter to order, Esc to go back) "),
        );
    f.render_widget(input, input_area);

    f.set_cursor_position((
        input_area.x + ((quantity.visual_cursor().max(scroll) - scroll) as u16) + 1,
        input_area.y + 1,
    ));
}

fn render_cart(f: &mut Frame, area: Rect, state: &StorefrontState) {
    let cart = state.cart();
    let block = panel_block(" Cart ", state.nav().focus == Panel::Cart);

    if cart.is_empty() {
        let empty = Paragraph::new("Cart is empty")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = cart
        .lines()
        .iter()
        .map(|line| {
            let total = order_money::to_f64(order_money::line_total(line));
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} x{}   ", line.name, line.quantity)),
                Span::styled(format!("{}$", money(total)), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol("> ")
        .highlight_style(Style::default().fg(Color::Yellow));
    let mut list_state = ListState::default().with_selected(Some(state.nav().cart_cursor));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let total = Paragraph::new(format!("Total: {}$", money(cart.total())))
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(total, chunks[1]);
}

fn render_orders(f: &mut Frame, area: Rect, state: &StorefrontState) {
    let view = state.orders();
    let block = panel_block(" Orders ", state.nav().focus == Panel::Orders);

    let mut notices: Vec<Line> = Vec::new();
    if view.loading {
        notices.push(Line::from("Loading orders..."));
    }
    if let Some(error) = &view.error {
        notices.push(Line::from(Span::styled(
            format!("Error loading orders: {}", error),
            Style::default().fg(Color::Red),
        )));
    }
    if view.is_empty() {
        notices.push(Line::from(Span::styled(
            "No orders.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if !notices.is_empty() {
        f.render_widget(Paragraph::new(notices).block(block), area);
        return;
    }

    let items: Vec<ListItem> = view.visible_orders().iter().map(order_row).collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().fg(Color::Yellow));
    let mut list_state = ListState::default().with_selected(Some(state.nav().order_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn order_row(order: &Order) -> ListItem<'static> {
    ListItem::new(Line::from(format!(
        "#{} - {} - {}$",
        order.id,
        order.status,
        money(order.total)
    )))
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Yellow } else { Color::White };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn stock_style(item: &MenuItem) -> Style {
    if item.is_sold_out() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    }
}

fn key_hints(state: &StorefrontState) -> &'static str {
    let nav = state.nav();
    match (nav.page, nav.view, nav.focus) {
        (Page::Menu, _, _) => " Tab: order food | q: quit",
        (Page::Ordering, OrderingView::Selected(_), _) => {
            " Type a quantity | Enter: order | Esc: back to foods"
        }
        (Page::Ordering, OrderingView::Browse, Panel::Foods) => {
            " Up/Down: move | Enter: select | Left/Right: panel | Tab: availability | q: quit"
        }
        (Page::Ordering, OrderingView::Browse, Panel::Cart) => {
            " Up/Down: move | x: remove | Left/Right: panel | Tab: availability | q: quit"
        }
        (Page::Ordering, OrderingView::Browse, Panel::Orders) => {
            " Up/Down: move | p: mark paid | d: delete | Left/Right: panel | q: quit"
        }
    }
}

/// Whole amounts without decimals, others with two
fn money(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
