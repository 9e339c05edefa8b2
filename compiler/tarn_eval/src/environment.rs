//! Runtime environments as an arena of frames.
//!
//! Each frame holds one binding and a handle to its parent. Extending an
//! environment pushes a frame; nothing is ever removed or rewritten, so two
//! environments that share a parent alias it safely. A recursive closure
//! refers to the frame that binds it, which is possible because the frame's
//! handle is known before the frame is pushed.

use tarn_ir::Name;

use crate::Value;

/// Handle to a frame in an `Environment`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(u32);

impl FrameId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Frame {
    name: Name,
    value: Value,
    parent: Option<FrameId>,
}

/// Frame arena owned by one evaluation.
#[derive(Debug, Default)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> FrameId {
        FrameId(u32::try_from(self.frames.len()).unwrap_or_else(|_| {
            panic!("environment exceeded {} frames", u32::MAX)
        }))
    }

    /// Extend `parent` with `name = value`.
    pub fn push(&mut self, name: Name, value: Value, parent: Option<FrameId>) -> FrameId {
        let id = self.next_id();
        self.frames.push(Frame {
            name,
            value,
            parent,
        });
        id
    }

    /// Extend `parent` with a binding whose value can refer to the new frame.
    ///
    /// `make` receives the id the frame will have.
    pub fn push_recursive(
        &mut self,
        name: Name,
        parent: Option<FrameId>,
        make: impl FnOnce(FrameId) -> Value,
    ) -> FrameId {
        let id = self.next_id();
        let value = make(id);
        self.frames.push(Frame {
            name,
            value,
            parent,
        });
        id
    }

    /// Innermost binding of `name` visible from `env`.
    pub fn lookup(&self, env: Option<FrameId>, name: Name) -> Option<&Value> {
        let mut current = env;
        while let Some(id) = current {
            let frame = self.frames.get(id.index())?;
            if frame.name == name {
                return Some(&frame.value);
            }
            current = frame.parent;
        }
        None
    }

    /// Value bound by the frame `id` itself.
    #[cfg(test)]
    pub(crate) fn value(&self, id: FrameId) -> Option<&Value> {
        self.frames.get(id.index()).map(|frame| &frame.value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
