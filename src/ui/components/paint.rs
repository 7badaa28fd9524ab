// Paint helpers - 토큰 기반 채색, 줄바꿈, 경계 검사
//
// 모든 쓰기는 버퍼 영역과 교차시킨 뒤 수행합니다.

use crate::ui::theme::TokenSet;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::border,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 좌표가 영역 안에 있는지
pub fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && row >= area.y
        && (col as u32) < area.x as u32 + area.width as u32
        && (row as u32) < area.y as u32 + area.height as u32
}

/// 역할 색상으로 배경 채우기 (그라디언트는 가로 방향 보간)
pub fn fill(buf: &mut Buffer, area: Rect, tokens: &TokenSet, role: &str) {
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return;
    }
    let span = area.width.saturating_sub(1).max(1) as f32;
    for x in area.x..area.right() {
        let bg = tokens.color_at(role, (x - area.x) as f32 / span);
        for y in area.y..area.bottom() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(bg);
            }
        }
    }
}

/// 문자열 쓰기 (max_width에서 잘림). 기존 배경은 유지됩니다.
///
/// 실제로 쓴 열 수를 반환합니다.
pub fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, max_width: u16) -> u16 {
    let bounds = buf.area;
    if y < bounds.y || y >= bounds.bottom() || x >= bounds.right() || x < bounds.x {
        return 0;
    }
    let limit = max_width.min(bounds.right() - x);
    let mut col = 0u16;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if col + w > limit {
            break;
        }
        if let Some(cell) = buf.cell_mut((x + col, y)) {
            cell.set_char(ch);
            if let Some(fg) = style.fg {
                cell.set_fg(fg);
            }
            if let Some(bg) = style.bg {
                cell.set_bg(bg);
            }
            cell.modifier.insert(style.add_modifier);
        }
        // 넓은 문자의 나머지 칸은 비움
        for extra in 1..w {
            if let Some(cell) = buf.cell_mut((x + col + extra, y)) {
                cell.set_symbol("");
            }
        }
        col += w;
    }
    col
}

/// 테두리 그리기
pub fn frame(buf: &mut Buffer, area: Rect, color: Color) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let set = border::ROUNDED;
    let style = Style::default().fg(color);
    let (left, right) = (area.x, area.right() - 1);
    let (top, bottom) = (area.y, area.bottom() - 1);

    for x in left + 1..right {
        put_str(buf, x, top, set.horizontal_top, style, 1);
        put_str(buf, x, bottom, set.horizontal_bottom, style, 1);
    }
    for y in top + 1..bottom {
        put_str(buf, left, y, set.vertical_left, style, 1);
        put_str(buf, right, y, set.vertical_right, style, 1);
    }
    put_str(buf, left, top, set.top_left, style, 1);
    put_str(buf, right, top, set.top_right, style, 1);
    put_str(buf, left, bottom, set.bottom_left, style, 1);
    put_str(buf, right, bottom, set.bottom_right, style, 1);
}

/// 가로 구분선
pub fn hline(buf: &mut Buffer, x: u16, y: u16, width: u16, color: Color) {
    let style = Style::default().fg(color);
    for dx in 0..width {
        put_str(buf, x + dx, y, border::PLAIN.horizontal_top, style, 1);
    }
}

/// 테두리 안쪽 영역
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// 단어 단위 줄바꿈 (표시 너비 기준)
///
/// 너비를 넘는 단어는 문자 단위로 자릅니다. 빈 문자열은 빈 줄 하나가 됩니다.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word.width() <= width {
            current.push_str(word);
        } else {
            for ch in word.chars() {
                if !current.is_empty() && current.width() + ch.width().unwrap_or(0) > width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
