//! Entity tree operations
//!
//! Attaching validates the whole move up front, so a rejected attach never
//! leaves a half-linked tree behind. Graph depth is rewritten for the moved
//! subtree synchronously.

use log::trace;

use super::{Entity, SceneError, SceneResult, World};

impl World {
    /// Attach `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// - `CycleDetected` if `child` is `parent` or one of its ancestors
    /// - `AlreadyParented` if `child` already has a parent
    /// - `DepthLimitExceeded` if the moved subtree would pass `max_graph_depth`
    pub fn add_child(&mut self, parent: Entity, child: Entity) -> SceneResult<()> {
        self.insert_child(parent, child, usize::MAX)
    }

    /// Attach `child` at `index` among the children of `parent`. The index is
    /// clamped to the number of children.
    pub fn insert_child(&mut self, parent: Entity, child: Entity, index: usize) -> SceneResult<()> {
        self.check_attach(parent, child)?;
        if let Some(current) = self.node(child)?.parent {
            return Err(SceneError::AlreadyParented {
                child,
                parent: current,
            });
        }
        self.link(parent, child, index)
    }

    /// Detach `child` from `parent`, leaving it as a root
    pub fn remove_child(&mut self, parent: Entity, child: Entity) -> SceneResult<()> {
        if self.node(child)?.parent != Some(parent) {
            return Err(SceneError::NotAChild { child, parent });
        }

        let siblings = &mut self.node_mut(parent)?.children;
        siblings.retain(|&sibling| sibling != child);
        self.node_mut(child)?.parent = None;
        self.update_depth(child, 0);

        trace!("Detached {:?} from {:?}", child, parent);
        self.scheduler().schedule(parent);
        Ok(())
    }

    /// Move `child` under `new_parent`, detaching it from any current parent.
    ///
    /// Validation happens before the detach, so a rejected move keeps the
    /// child where it was.
    pub fn reparent(&mut self, child: Entity, new_parent: Entity) -> SceneResult<()> {
        self.check_attach(new_parent, child)?;
        if let Some(current) = self.node(child)?.parent {
            self.remove_child(current, child)?;
        }
        self.link(new_parent, child, usize::MAX)
    }

    fn check_attach(&self, parent: Entity, child: Entity) -> SceneResult<()> {
        let parent_depth = self.node(parent)?.graph_depth;
        self.node(child)?;

        if child == parent || self.is_ancestor_of(child, parent) {
            return Err(SceneError::CycleDetected { child, parent });
        }

        let limit = self.config.max_graph_depth;
        if parent_depth + 1 + self.subtree_height(child) > limit {
            return Err(SceneError::DepthLimitExceeded { child, limit });
        }
        Ok(())
    }

    fn link(&mut self, parent: Entity, child: Entity, index: usize) -> SceneResult<()> {
        let parent_node = self.node_mut(parent)?;
        let index = index.min(parent_node.children.len());
        parent_node.children.insert(index, child);
        let depth = parent_node.graph_depth + 1;

        self.node_mut(child)?.parent = Some(parent);
        self.update_depth(child, depth);

        trace!("Attached {:?} under {:?} at index {}", child, parent, index);
        self.scheduler().schedule(parent);
        Ok(())
    }

    fn update_depth(&mut self, entity: Entity, depth: usize) {
        let mut stack = vec![(entity, depth)];
        while let Some((current, depth)) = stack.pop() {
            if let Some(node) = self.entities.get_mut(current) {
                node.graph_depth = depth;
                stack.extend(node.children.iter().map(|&child| (child, depth + 1)));
            }
        }
    }

    /// Levels below `entity` in its own subtree, 0 for a leaf
    fn subtree_height(&self, entity: Entity) -> usize {
        let mut height = 0;
        let mut stack = vec![(entity, 0)];
        while let Some((current, level)) = stack.pop() {
            height = height.max(level);
            if let Some(node) = self.entities.get(current) {
                stack.extend(node.children.iter().map(|&child| (child, level + 1)));
            }
        }
        height
    }

    /// Children in order
    pub fn children(&self, entity: Entity) -> SceneResult<&[Entity]> {
        Ok(self.node(entity)?.children())
    }

    /// Parent, `None` for roots
    pub fn parent(&self, entity: Entity) -> SceneResult<Option<Entity>> {
        Ok(self.node(entity)?.parent)
    }

    /// Number of ancestor links up to the root
    pub fn graph_depth(&self, entity: Entity) -> SceneResult<usize> {
        Ok(self.node(entity)?.graph_depth)
    }

    /// Every entity below `entity`, pre-order, children in order
    pub fn descendants(&self, entity: Entity) -> SceneResult<Vec<Entity>> {
        let mut found = Vec::new();
        let mut stack: Vec<Entity> = self.node(entity)?.children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            found.push(current);
            let node = self.node(current)?;
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(found)
    }

    /// Ancestors of `entity`, nearest first
    pub fn ancestors(&self, entity: Entity) -> SceneResult<Vec<Entity>> {
        let mut found = Vec::new();
        let mut current = self.node(entity)?.parent;
        while let Some(ancestor) = current {
            found.push(ancestor);
            current = self.node(ancestor)?.parent;
        }
        Ok(found)
    }

    /// Whether `ancestor` sits strictly above `entity`
    pub fn is_ancestor_of(&self, ancestor: Entity, entity: Entity) -> bool {
        let mut current = self.entities.get(entity).and_then(|node| node.parent);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.entities.get(candidate).and_then(|node| node.parent);
        }
        false
    }

    /// Topmost ancestor, or the entity itself for a root
    pub fn root_of(&self, entity: Entity) -> SceneResult<Entity> {
        Ok(self.ancestors(entity)?.last().copied().unwrap_or(entity))
    }

    /// First entity named `name` in the subtree of `root`, pre-order, `root` included
    pub fn find_by_name(&self, root: Entity, name: &str) -> Option<Entity> {
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            let node = self.entities.get(current)?;
            if node.name == name {
                return Some(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// Follow a `/`-separated chain of child names starting below `root`
    pub fn find_by_path(&self, root: Entity, path: &str) -> Option<Entity> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(root, |current, segment| {
                self.entities
                    .get(current)?
                    .children
                    .iter()
                    .copied()
                    .find(|&child| self.entities.get(child).is_some_and(|node| node.name == segment))
            })
    }
}
