//! 다중 마킹을 지원하는 순서 리스트
//!
//! 사용 가능한 파일 목록과 프린터별 큐 양쪽에서 사용합니다.
//! 마킹된 인덱스는 항상 `[0, len)` 범위 안에 있으며, 마킹한 순서를 유지합니다.

#![allow(dead_code)]

use crate::utils::error::{PrintFlowError, Result};

/// 선택 가능한 리스트
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    items: Vec<T>,
    /// 마킹된 인덱스 (마킹 순서, 중복 없음)
    marked: Vec<usize>,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            marked: Vec::new(),
        }
    }

    /// 끝에 항목 추가
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// 마킹된 인덱스 (마킹 순서)
    pub fn marked(&self) -> &[usize] {
        &self.marked
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// 인덱스 마킹 (이미 마킹되어 있으면 그대로)
    pub fn mark(&mut self, index: usize) -> Result<()> {
        PrintFlowError::check_index(index, self.items.len())?;
        if !self.marked.contains(&index) {
            self.marked.push(index);
        }
        Ok(())
    }

    /// 인덱스 마킹 해제
    pub fn unmark(&mut self, index: usize) -> Result<()> {
        PrintFlowError::check_index(index, self.items.len())?;
        self.marked.retain(|&i| i != index);
        Ok(())
    }

    /// 마킹 토글. 토글 후 마킹 상태를 반환한다.
    pub fn toggle_mark(&mut self, index: usize) -> Result<bool> {
        if self.is_marked(index) {
            self.unmark(index)?;
            Ok(false)
        } else {
            self.mark(index)?;
            Ok(true)
        }
    }

    /// 아직 마킹되지 않은 항목을 순서대로 모두 마킹
    pub fn mark_all(&mut self) {
        for index in 0..self.items.len() {
            if !self.marked.contains(&index) {
                self.marked.push(index);
            }
        }
    }

    pub fn unmark_all(&mut self) {
        self.marked.clear();
    }

    /// 마킹 목록을 꺼내고 비운다
    ///
    /// 두 번 연속 호출하면 두 번째는 빈 목록을 돌려준다.
    pub fn accept_marked(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.marked)
    }

    /// 주어진 인덱스의 항목을 제거하고 반환
    ///
    /// 반환 순서는 인덱스가 주어진 순서를 따르고, 실제 제거는 내림차순으로
    /// 수행해 앞쪽 제거가 뒤쪽 인덱스를 밀어내지 않도록 한다.
    /// 범위를 벗어난 인덱스가 하나라도 있으면 아무것도 바꾸지 않고 에러를 반환한다.
    pub fn remove_and_collect(&mut self, indices: &[usize]) -> Result<Vec<T>> {
        let len = self.items.len();
        let mut unique: Vec<usize> = Vec::with_capacity(indices.len());
        for &index in indices {
            PrintFlowError::check_index(index, len)?;
            if !unique.contains(&index) {
                unique.push(index);
            }
        }

        let mut descending = unique.clone();
        descending.sort_unstable_by(|a, b| b.cmp(a));

        let mut removed: Vec<(usize, T)> = Vec::with_capacity(descending.len());
        for index in descending {
            removed.push((index, self.items.remove(index)));
        }

        self.remap_marks(&unique);

        // 수집은 원래 주어진 순서대로
        let mut collected = Vec::with_capacity(unique.len());
        for index in unique {
            if let Some(pos) = removed.iter().position(|(i, _)| *i == index) {
                collected.push(removed.swap_remove(pos).1);
            }
        }
        Ok(collected)
    }

    /// 제거된 행의 마킹은 버리고, 남은 마킹은 앞당겨진 위치로 옮긴다
    fn remap_marks(&mut self, removed: &[usize]) {
        if self.marked.is_empty() {
            return;
        }
        self.marked = self
            .marked
            .iter()
            .filter(|index| !removed.contains(index))
            .map(|&index| index - removed.iter().filter(|&&r| r < index).count())
            .collect();
    }
}

impl<T> FromIterator<T> for SelectableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            marked: Vec::new(),
        }
    }
}
