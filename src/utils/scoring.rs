//! 进度与测验的纯计分函数
//!
//! 百分比取整采用 `f64::round`（四舍五入，远离零）。对本系统只会出现的
//! 非负输入即 round-half-up：2/3 课时恒为 67%。

use crate::models::quizzes::entities::Question;

/// 计算学习进度百分比，返回 0..=100
///
/// total 为 0 时返回 0。
pub fn progress_percentage(completed: i32, total: i32) -> i32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as i32
}

/// 按答案下标计算测验得分，返回 0..=100
///
/// 第 i 题计分当且仅当 answers[i] 落在该题选项范围内且该选项 is_correct。
/// 下标越界按答错处理，不报错。题目为空时定义为 0。
pub fn quiz_score(answers: &[usize], questions: &[Question]) -> i32 {
    if questions.is_empty() {
        return 0;
    }

    let correct_count = answers
        .iter()
        .enumerate()
        .filter(|(question_index, answer_index)| {
            questions
                .get(*question_index)
                .and_then(|q| q.options.get(**answer_index))
                .is_some_and(|option| option.is_correct)
        })
        .count();

    ((correct_count as f64 / questions.len() as f64) * 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quizzes::entities::QuestionOption;

    fn question(correct_index: usize, option_count: usize) -> Question {
        Question {
            question_text: "q".to_string(),
            options: (0..option_count)
                .map(|i| QuestionOption {
                    text: format!("option {i}"),
                    is_correct: i == correct_index,
                })
                .collect(),
            explanation: None,
        }
    }

    #[test]
    fn test_progress_percentage_zero_total() {
        assert_eq!(progress_percentage(0, 0), 0);
        assert_eq!(progress_percentage(5, 0), 0);
    }

    #[test]
    fn test_progress_percentage_full_completion() {
        assert_eq!(progress_percentage(1, 1), 100);
        assert_eq!(progress_percentage(4, 4), 100);
        assert_eq!(progress_percentage(37, 37), 100);
    }

    #[test]
    fn test_progress_percentage_quarters() {
        assert_eq!(progress_percentage(1, 4), 25);
        assert_eq!(progress_percentage(2, 4), 50);
        assert_eq!(progress_percentage(3, 4), 75);
        assert_eq!(progress_percentage(4, 4), 100);
    }

    #[test]
    fn test_progress_percentage_rounding_half_up() {
        // 2/3 = 66.67 -> 67，1/3 = 33.33 -> 33
        assert_eq!(progress_percentage(2, 3), 67);
        assert_eq!(progress_percentage(1, 3), 33);
        // 1/8 = 12.5 -> 13（远离零取整）
        assert_eq!(progress_percentage(1, 8), 13);
    }

    #[test]
    fn test_progress_percentage_monotonic() {
        for total in 1..=20 {
            let mut last = -1;
            for completed in 0..=total {
                let pct = progress_percentage(completed, total);
                assert!(pct >= last, "percentage decreased at {completed}/{total}");
                last = pct;
            }
            assert_eq!(last, 100);
        }
    }

    #[test]
    fn test_quiz_score_all_correct() {
        let questions = vec![question(0, 4), question(2, 4), question(3, 4)];
        assert_eq!(quiz_score(&[0, 2, 3], &questions), 100);
    }

    #[test]
    fn test_quiz_score_all_wrong() {
        let questions = vec![question(0, 4), question(2, 4)];
        assert_eq!(quiz_score(&[1, 3], &questions), 0);
    }

    #[test]
    fn test_quiz_score_partial_with_rounding() {
        // 1/3 正确 -> 33，2/3 正确 -> 67
        let questions = vec![question(0, 2), question(0, 2), question(0, 2)];
        assert_eq!(quiz_score(&[0, 1, 1], &questions), 33);
        assert_eq!(quiz_score(&[0, 0, 1], &questions), 67);
    }

    #[test]
    fn test_quiz_score_out_of_range_index_is_miss() {
        let questions = vec![question(0, 2), question(1, 2)];
        // 下标 7 越界，按答错处理
        assert_eq!(quiz_score(&[0, 7], &questions), 50);
    }

    #[test]
    fn test_quiz_score_empty_questions() {
        assert_eq!(quiz_score(&[], &[]), 0);
        assert_eq!(quiz_score(&[1, 2, 3], &[]), 0);
    }
}
