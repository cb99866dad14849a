use ratatui::layout::Rect;

/// A rect of at most `width` x `height`, centered inside `area`.
pub(super) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_request_is_clamped_to_the_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(area, 100, 100);
        assert_eq!(rect, area);
    }

    #[test]
    fn rect_is_centered() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(area, 20, 4);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }
}
