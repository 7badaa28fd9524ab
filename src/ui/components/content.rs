// Content component - 모든 레이아웃이 공유하는 본문
//
// 제목, 활성 테마 이름을 강조한 설명문, 기능 목록 패널, 샘플 카드 두 개

use super::paint::{fill, frame, inner, put_str, wrap};
use crate::ui::dispatcher::ContentBody;
use crate::ui::theme::{role, TokenSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

const PAD_X: u16 = 2;
const BULLET: &str = "• ";

/// 본문 섹션 배치 (area 기준 절대 좌표)
struct Sections {
    title: Rect,
    description: Rect,
    features: Rect,
    list_card: Rect,
    button_card: Rect,
    bottom: u16,
}

/// 본문 컴포넌트
pub struct ContentView<'a> {
    body: &'a ContentBody,
    tokens: &'a TokenSet,
}

impl<'a> ContentView<'a> {
    pub fn new(body: &'a ContentBody, tokens: &'a TokenSet) -> Self {
        Self { body, tokens }
    }

    fn description_text(&self) -> String {
        let d = &self.body.description;
        format!("{} {}{}", d.lead, d.highlight, d.tail)
    }

    fn feature_lines(&self, width: u16) -> Vec<(bool, String)> {
        let text_width = width.saturating_sub(BULLET.width() as u16);
        self.body
            .features
            .iter()
            .flat_map(|feature| {
                wrap(feature, text_width)
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| (i == 0, line))
            })
            .collect()
    }

    fn sections(&self, area: Rect) -> Sections {
        let x = area.x + PAD_X;
        let width = area.width.saturating_sub(PAD_X * 2).max(1);
        let mut y = area.y + 1;

        let title = Rect::new(x, y, width, 1);
        y += 2;

        let desc_height = wrap(&self.description_text(), width).len() as u16;
        let description = Rect::new(x, y, width, desc_height);
        y += desc_height + 1;

        // 테두리(2) + 제목(1) + 빈 줄(1) + 항목
        let feature_rows = self.feature_lines(width.saturating_sub(4)).len() as u16;
        let features = Rect::new(x, y, width, 4 + feature_rows);
        y += features.height + 1;

        let list_height = 3 + self.body.list_card.items.len() as u16;
        let button_height = 5;
        let (list_card, button_card) = if self.body.columns >= 2 {
            let half = width.saturating_sub(1) / 2;
            let height = list_height.max(button_height);
            let list = Rect::new(x, y, half, height);
            let button = Rect::new(x + half + 1, y, width - half - 1, height);
            y += height;
            (list, button)
        } else {
            let list = Rect::new(x, y, width, list_height);
            y += list_height + 1;
            let button = Rect::new(x, y, width, button_height);
            y += button_height;
            (list, button)
        };

        Sections {
            title,
            description,
            features,
            list_card,
            button_card,
            bottom: y + 1,
        }
    }

    /// 주어진 너비에서 필요한 높이
    pub fn height(&self, width: u16) -> u16 {
        self.sections(Rect::new(0, 0, width, 0)).bottom
    }

    fn render_description(&self, area: Rect, buf: &mut Buffer) {
        let text = self.description_text();
        let highlight_start = self.body.description.lead.len() + 1;
        let highlight_end = highlight_start + self.body.description.highlight.len();

        let normal = Style::default().fg(self.tokens.color(role::TEXT_SECONDARY));
        let strong = Style::default()
            .fg(self.tokens.color(role::PRIMARY))
            .add_modifier(Modifier::BOLD);

        let mut cursor = 0;
        for (row, line) in wrap(&text, area.width).iter().enumerate() {
            let Some(found) = text[cursor..].find(line.as_str()) else {
                break;
            };
            let start = cursor + found;
            cursor = start + line.len();

            let mut x = area.x;
            for (offset, ch) in line.char_indices() {
                let pos = start + offset;
                let style = if (highlight_start..highlight_end).contains(&pos) {
                    strong
                } else {
                    normal
                };
                let mut tmp = [0u8; 4];
                x += put_str(
                    buf,
                    x,
                    area.y + row as u16,
                    ch.encode_utf8(&mut tmp),
                    style,
                    area.right().saturating_sub(x),
                );
            }
        }
    }

    fn render_features(&self, area: Rect, buf: &mut Buffer) {
        fill(buf, area, self.tokens, role::CARD);
        frame(buf, area, self.tokens.color(role::BORDER));

        let body = inner(area);
        let x = body.x + 1;
        let width = body.width.saturating_sub(2);
        put_str(
            buf,
            x,
            body.y,
            self.body.feature_title,
            Style::default()
                .fg(self.tokens.color(role::TEXT))
                .add_modifier(Modifier::BOLD),
            width,
        );

        let bullet_style = Style::default().fg(self.tokens.color(role::PRIMARY));
        let text_style = Style::default().fg(self.tokens.color(role::TEXT_SECONDARY));
        let indent = BULLET.width() as u16;
        for (i, (first, line)) in self.feature_lines(width).iter().enumerate() {
            let y = body.y + 2 + i as u16;
            if *first {
                put_str(buf, x, y, BULLET, bullet_style, indent);
            }
            put_str(buf, x + indent, y, line, text_style, width.saturating_sub(indent));
        }
    }

    fn render_list_card(&self, area: Rect, buf: &mut Buffer) {
        self.card_frame(area, self.body.list_card.title, buf);
        let body = inner(area);
        let style = Style::default().fg(self.tokens.color(role::TEXT));
        for (i, item) in self.body.list_card.items.iter().enumerate() {
            let row = Rect::new(body.x, body.y + 1 + i as u16, body.width, 1);
            fill(buf, row, self.tokens, role::ACCENT);
            put_str(buf, row.x + 1, row.y, item, style, row.width.saturating_sub(2));
        }
    }

    fn render_button_card(&self, area: Rect, buf: &mut Buffer) {
        self.card_frame(area, self.body.button_card.title, buf);
        let body = inner(area);
        let label = format!(" {} ", self.body.button_card.label);
        let button = Rect::new(
            body.x + 1,
            body.y + 2,
            (label.width() as u16).min(body.width.saturating_sub(2)),
            1,
        );
        fill(buf, button, self.tokens, role::BUTTON);
        put_str(
            buf,
            button.x,
            button.y,
            &label,
            Style::default()
                .fg(self.tokens.color(role::ON_PRIMARY))
                .add_modifier(Modifier::BOLD),
            button.width,
        );
    }

    fn card_frame(&self, area: Rect, title: &str, buf: &mut Buffer) {
        fill(buf, area, self.tokens, role::CARD);
        frame(buf, area, self.tokens.color(role::BORDER));
        let body = inner(area);
        put_str(
            buf,
            body.x + 1,
            body.y,
            title,
            Style::default()
                .fg(self.tokens.color(role::TEXT))
                .add_modifier(Modifier::BOLD),
            body.width.saturating_sub(2),
        );
    }
}

impl Widget for ContentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let sections = self.sections(area);

        put_str(
            buf,
            sections.title.x,
            sections.title.y,
            self.body.title,
            Style::default()
                .fg(self.tokens.color(role::TEXT))
                .add_modifier(Modifier::BOLD),
            sections.title.width,
        );
        self.render_description(sections.description, buf);
        self.render_features(sections.features, buf);
        self.render_list_card(sections.list_card, buf);
        self.render_button_card(sections.button_card, buf);
    }
}
