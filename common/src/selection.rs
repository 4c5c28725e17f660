//! スコアベクトルから最良クラスを選ぶ

/// 最大スコアのインデックスとスコア
///
/// 同点の場合は最初に現れたものを採用する。NaNは無視する。
/// 空またはすべてNaNなら `None`。
///
/// # Examples
/// ```
/// use clean_sea_vision_common::select_best;
///
/// assert_eq!(select_best(&[0.2, 0.9, 0.9, 0.1]), Some((1, 0.9)));
/// assert_eq!(select_best(&[]), None);
/// ```
pub fn select_best(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;

    for (i, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }

    best
}
