use crate::error::{AppError, AppResult};

/// 星级评分控件
///
/// 持有当前选中的评分，星位的明暗完全由评分值决定：
/// 值 <= 当前评分的星位点亮，其余熄灭。没有中间状态。
#[derive(Debug, Clone)]
pub struct RatingWidget {
    max_stars: u8,
    rating: u8,
}

impl RatingWidget {
    /// 创建评分控件，星位从 1 开始编号
    pub fn new(max_stars: u8) -> Self {
        Self {
            max_stars,
            rating: 0,
        }
    }

    pub fn max_stars(&self) -> u8 {
        self.max_stars
    }

    /// 当前评分（0 表示未选择）
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// 选中第 n 颗星
    ///
    /// 要求 1 <= n <= max_stars，重复选择是幂等的
    pub fn select(&mut self, n: u8) -> AppResult<()> {
        if n < 1 || n > self.max_stars {
            return Err(AppError::rating_out_of_range(n, self.max_stars));
        }
        self.rating = n;
        Ok(())
    }

    /// 清空评分，所有星位熄灭
    pub fn reset(&mut self) {
        self.rating = 0;
    }

    /// 第 n 颗星是否点亮
    pub fn is_filled(&self, n: u8) -> bool {
        n >= 1 && n <= self.rating
    }

    /// 终端显示用的星位行，例如 "★★★☆☆ (3/5)"
    pub fn render_line(&self) -> String {
        let mut line = String::new();
        for n in 1..=self.max_stars {
            line.push(if self.is_filled(n) { '★' } else { '☆' });
        }
        format!("{} ({}/{})", line, self.rating, self.max_stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_fills_prefix() {
        let mut widget = RatingWidget::new(5);
        widget.select(3).unwrap();

        assert_eq!(widget.rating(), 3);
        for n in 1..=3 {
            assert!(widget.is_filled(n), "第 {} 颗星应该点亮", n);
        }
        for n in 4..=5 {
            assert!(!widget.is_filled(n), "第 {} 颗星不应该点亮", n);
        }
    }

    #[test]
    fn test_reselect_has_no_history() {
        let mut widget = RatingWidget::new(5);
        widget.select(5).unwrap();
        widget.select(2).unwrap();

        // 星位状态只取决于最后一次选择
        assert_eq!(widget.rating(), 2);
        assert!(widget.is_filled(2));
        assert!(!widget.is_filled(3));
        assert!(!widget.is_filled(5));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut widget = RatingWidget::new(5);
        assert!(widget.select(0).is_err());
        assert!(widget.select(6).is_err());
        // 失败的选择不改变状态
        assert_eq!(widget.rating(), 0);
    }

    #[test]
    fn test_reset_clears_all() {
        let mut widget = RatingWidget::new(5);
        widget.select(4).unwrap();
        widget.reset();

        assert_eq!(widget.rating(), 0);
        for n in 1..=5 {
            assert!(!widget.is_filled(n));
        }
    }

    #[test]
    fn test_render_line() {
        let mut widget = RatingWidget::new(5);
        widget.select(3).unwrap();
        assert_eq!(widget.render_line(), "★★★☆☆ (3/5)");

        widget.reset();
        assert_eq!(widget.render_line(), "☆☆☆☆☆ (0/5)");
    }
}
