// Card grid component - CardGrid 레이아웃의 내비게이션 카드 격자

use super::paint::{fill, frame, inner, put_str, wrap};
use crate::ui::dispatcher::{CardGridChrome, NavCard};
use crate::ui::icons::{glyph, IconMode};
use crate::ui::theme::{role, TokenSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

const GAP: u16 = 1;

/// 카드 격자 컴포넌트
pub struct CardGrid<'a> {
    chrome: &'a CardGridChrome,
    tokens: &'a TokenSet,
    icons: IconMode,
}

impl<'a> CardGrid<'a> {
    pub fn new(chrome: &'a CardGridChrome, tokens: &'a TokenSet) -> Self {
        Self {
            chrome,
            tokens,
            icons: IconMode::default(),
        }
    }

    pub fn icons(mut self, mode: IconMode) -> Self {
        self.icons = mode;
        self
    }

    fn columns(&self) -> u16 {
        self.chrome.columns.max(1)
    }

    fn card_width(&self, width: u16) -> u16 {
        let cols = self.columns();
        (width.saturating_sub((cols - 1) * GAP) / cols).max(1)
    }

    fn card_height(&self, card: &NavCard, card_width: u16) -> u16 {
        // 테두리(2) + 제목(1) + 설명
        3 + wrap(&card.description, card_width.saturating_sub(4)).len() as u16
    }

    fn row_heights(&self, width: u16) -> Vec<u16> {
        let card_width = self.card_width(width);
        self.chrome
            .cards
            .chunks(self.columns() as usize)
            .map(|row| {
                row.iter()
                    .map(|card| self.card_height(card, card_width))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// 주어진 너비에서 필요한 높이
    pub fn height(&self, width: u16) -> u16 {
        let rows = self.row_heights(width);
        let gaps = rows.len().saturating_sub(1) as u16 * GAP;
        rows.iter().sum::<u16>() + gaps
    }

    fn render_card(&self, card: &NavCard, area: Rect, buf: &mut Buffer) {
        fill(buf, area, self.tokens, role::CARD);
        frame(buf, area, self.tokens.color(role::BORDER));

        let body = inner(area);
        if body.is_empty() {
            return;
        }
        let badge = Rect::new(body.x + 1, body.y, 3.min(body.width.saturating_sub(1)), 1);
        fill(buf, badge, self.tokens, role::PRIMARY);
        put_str(
            buf,
            badge.x + 1,
            badge.y,
            glyph(card.icon, self.icons),
            Style::default().fg(self.tokens.color(role::ON_PRIMARY)),
            1,
        );
        put_str(
            buf,
            badge.right() + 1,
            body.y,
            card.title,
            Style::default()
                .fg(self.tokens.color(role::TEXT))
                .add_modifier(Modifier::BOLD),
            body.right().saturating_sub(badge.right() + 1),
        );

        let desc_style = Style::default().fg(self.tokens.color(role::TEXT_SECONDARY));
        for (i, line) in wrap(&card.description, body.width.saturating_sub(2))
            .iter()
            .enumerate()
        {
            let y = body.y + 1 + i as u16;
            if y >= body.bottom() {
                break;
            }
            put_str(buf, body.x + 1, y, line, desc_style, body.width.saturating_sub(2));
        }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let cols = self.columns() as usize;
        let card_width = self.card_width(area.width);

        let mut y = area.y;
        for (row, height) in self
            .chrome
            .cards
            .chunks(cols)
            .zip(self.row_heights(area.width))
        {
            for (i, card) in row.iter().enumerate() {
                let x = area.x + i as u16 * (card_width + GAP);
                let card_area = Rect::new(x, y, card_width, height).intersection(area);
                self.render_card(card, card_area, buf);
            }
            y = y.saturating_add(height + GAP);
            if y >= area.bottom() {
                break;
            }
        }
    }
}
