//! 임의 깊이 중첩 시퀀스
//!
//! 단어(1차원), 배치(2차원), 후보 목록 배치(3차원)를 하나의 재귀 타입으로 표현하고,
//! 스칼라 변환을 모양 그대로 모든 잎에 적용합니다.
//!
//! 모양 검증은 하지 않습니다. 길이가 들쭉날쭉한 입력도 원소 단위로 그대로 매핑되며,
//! 직사각형 결과가 필요하면 호출자가 보장해야 합니다.

/// 스칼라 또는 자기 자신의 시퀀스
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// 스칼라 값
    Leaf(T),
    /// 하위 원소 목록
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// 1차원 시퀀스 (단어 하나)
    pub fn row<I: IntoIterator<Item = T>>(items: I) -> Self {
        Nested::Seq(items.into_iter().map(Nested::Leaf).collect())
    }

    /// 2차원 시퀀스 (batch, seq_len)
    pub fn grid<R: IntoIterator<Item = T>, I: IntoIterator<Item = R>>(rows: I) -> Self {
        Nested::Seq(rows.into_iter().map(Nested::row).collect())
    }

    /// 3차원 시퀀스 (batch, candidates, seq_len)
    pub fn cube<R, C, I>(batches: I) -> Self
    where
        R: IntoIterator<Item = T>,
        C: IntoIterator<Item = R>,
        I: IntoIterator<Item = C>,
    {
        Nested::Seq(batches.into_iter().map(Nested::grid).collect())
    }

    /// 스칼라 변환을 모든 잎에 적용 (모양 유지)
    pub fn map<U, F>(&self, mut f: F) -> Nested<U>
    where
        F: FnMut(&T) -> U,
    {
        self.map_inner(&mut f)
    }

    fn map_inner<U, F>(&self, f: &mut F) -> Nested<U>
    where
        F: FnMut(&T) -> U,
    {
        match self {
            Nested::Leaf(value) => Nested::Leaf(f(value)),
            Nested::Seq(items) => Nested::Seq(items.iter().map(|item| item.map_inner(f)).collect()),
        }
    }

    /// 실패할 수 있는 변환을 모든 잎에 적용
    /// 첫 번째 에러에서 중단하고 그대로 전파
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<Nested<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        self.try_map_inner(&mut f)
    }

    fn try_map_inner<U, E, F>(&self, f: &mut F) -> Result<Nested<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        match self {
            Nested::Leaf(value) => f(value).map(Nested::Leaf),
            Nested::Seq(items) => items
                .iter()
                .map(|item| item.try_map_inner(f))
                .collect::<Result<Vec<_>, E>>()
                .map(Nested::Seq),
        }
    }

    /// 중첩 깊이 (스칼라 = 0)
    ///
    /// 가장 깊은 원소 기준으로 계산하므로 앞쪽의 빈 행에 영향받지 않습니다.
    /// 빈 시퀀스는 깊이 1입니다. `(b, 0, L)`처럼 안쪽이 전부 비어 있으면
    /// `(b, 0)`과 구별할 수 없습니다.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::Seq(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }

    /// 빈 시퀀스인지 확인
    pub fn is_empty_seq(&self) -> bool {
        matches!(self, Nested::Seq(items) if items.is_empty())
    }
}

impl<T: Clone> Nested<T> {
    /// 잎만으로 이루어진 시퀀스이면 Vec으로 반환
    pub fn to_row(&self) -> Option<Vec<T>> {
        match self {
            Nested::Leaf(_) => None,
            Nested::Seq(items) => items
                .iter()
                .map(|item| match item {
                    Nested::Leaf(value) => Some(value.clone()),
                    Nested::Seq(_) => None,
                })
                .collect(),
        }
    }

    /// 2차원이면 Vec<Vec<T>>로 반환
    pub fn to_grid(&self) -> Option<Vec<Vec<T>>> {
        match self {
            Nested::Leaf(_) => None,
            Nested::Seq(items) => items.iter().map(Nested::to_row).collect(),
        }
    }

    /// 3차원이면 Vec<Vec<Vec<T>>>로 반환
    pub fn to_cube(&self) -> Option<Vec<Vec<Vec<T>>>> {
        match self {
            Nested::Leaf(_) => None,
            Nested::Seq(items) => items.iter().map(Nested::to_grid).collect(),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_scalar() {
        let value = Nested::Leaf(3);
        assert_eq!(value.map(|x| x * 2), Nested::Leaf(6));
    }

    #[test]
    fn test_map_preserves_shape() {
        let row = Nested::row(vec![1, 2, 3]);
        assert_eq!(row.map(|x| x + 1), Nested::row(vec![2, 3, 4]));

        let grid = Nested::grid(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(
            grid.map(|x| x * 10),
            Nested::grid(vec![vec![10, 20], vec![30, 40]])
        );

        let cube = Nested::cube(vec![vec![vec![1], vec![2]], vec![vec![3], vec![4]]]);
        let mapped = cube.map(|x| x.to_string());
        assert_eq!(mapped.depth(), 3);
        assert_eq!(
            mapped.to_cube(),
            Some(vec![
                vec![vec!["1".to_string()], vec!["2".to_string()]],
                vec![vec!["3".to_string()], vec!["4".to_string()]],
            ])
        );
    }

    #[test]
    fn test_map_jagged_input() {
        // 길이가 다른 행도 검증 없이 그대로 매핑
        let jagged = Nested::grid(vec![vec![1], vec![2, 3, 4], vec![]]);
        let mapped = jagged.map(|x| x * 2);
        assert_eq!(mapped.to_grid(), Some(vec![vec![2], vec![4, 6, 8], vec![]]));
    }

    #[test]
    fn test_map_visits_in_order() {
        let grid = Nested::grid(vec![vec!['a', 'b'], vec!['c']]);
        let mut seen = Vec::new();
        grid.map(|c| seen.push(*c));
        assert_eq!(seen, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_try_map_stops_at_first_error() {
        let row = Nested::row(vec![1, 5, 2, 7]);
        let mut visited = 0;
        let result: Result<Nested<i32>, i32> = row.try_map(|&x| {
            visited += 1;
            if x > 4 {
                Err(x)
            } else {
                Ok(x)
            }
        });
        assert_eq!(result, Err(5));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Nested::Leaf(1).depth(), 0);
        assert_eq!(Nested::row(vec![1, 2]).depth(), 1);
        assert_eq!(Nested::<i32>::Seq(vec![]).depth(), 1);
        assert_eq!(Nested::grid(vec![vec![1]]).depth(), 2);
        assert_eq!(Nested::cube(vec![vec![vec![1]]]).depth(), 3);
    }

    #[test]
    fn test_depth_skips_leading_empty_rows() {
        let grid = Nested::grid(vec![vec![], vec![1, 2]]);
        assert_eq!(grid.depth(), 2);

        let cube = Nested::cube(vec![vec![], vec![vec![1]]]);
        assert_eq!(cube.depth(), 3);

        // 후보가 전부 비면 2차원과 구별 불가
        let hollow: Nested<i32> = Nested::cube(vec![Vec::<Vec<i32>>::new(), Vec::new()]);
        assert_eq!(hollow.depth(), 2);
        assert!(Nested::<i32>::Seq(vec![]).is_empty_seq());
        assert!(!hollow.is_empty_seq());
    }

    #[test]
    fn test_views_reject_wrong_shape() {
        let row = Nested::row(vec![1, 2]);
        assert_eq!(row.to_row(), Some(vec![1, 2]));
        assert_eq!(row.to_grid(), None);

        let mixed = Nested::Seq(vec![Nested::Leaf(1), Nested::row(vec![2])]);
        assert_eq!(mixed.to_row(), None);
        assert_eq!(mixed.to_grid(), None);
        assert_eq!(Nested::Leaf(1).to_row(), None);
    }
}
