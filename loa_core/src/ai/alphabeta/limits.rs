/// 探索の制限。
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchLimits {
    /// 探索の最大深さ（ply）。
    max_depth: u8,
}

impl SearchLimits {
    /// 探索の最大深さ（ply）を返す。
    pub(super) const fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// 探索制限を生成する。
    pub(super) const fn new(max_depth: u8) -> Self {
        Self { max_depth }
    }
}

/// 探索統計。
#[derive(Default, Clone, Copy, Debug)]
pub(super) struct SearchStats {
    /// αβ枝刈りでループを打ち切った回数。
    cutoffs: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りの回数を返す。
    pub(super) const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 探索ノード数を返す。
    pub(super) const fn nodes(&self) -> u64 {
        self.nodes
    }
}
