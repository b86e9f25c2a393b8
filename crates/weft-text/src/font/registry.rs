use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::{Mutex, RwLock};

use crate::font::descriptor::closest_index;
use crate::font::{Face, FontDescriptor, Typeface};

/// Registry shared between layout engines and font loaders.
pub type SharedRegistry<F> = Arc<RwLock<FontRegistry<F>>>;

/// Identifier of a face within a [`FontRegistry`], in load order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// A face together with the descriptor it was registered under.
#[derive(Debug)]
pub struct LoadedFace<F> {
    pub descriptor: FontDescriptor,
    pub face: Arc<F>,
}

/// In-memory set of loaded faces and the fallback order derived from them.
///
/// Loading a face invalidates every memoized fallback chain, so callers
/// sharing a registry across threads take the write lock of
/// [`SharedRegistry`] to load and the read lock to lay out.
#[derive(Debug)]
pub struct FontRegistry<F> {
    faces: Vec<LoadedFace<F>>,
    /// Typefaces preferred, in order, after the requested one.
    fallback_order: Vec<Typeface>,
    chains: Mutex<HashMap<FontDescriptor, Arc<[FaceId]>>>,
}

impl<F> Default for FontRegistry<F> {
    fn default() -> Self {
        Self {
            faces: Vec::new(),
            fallback_order: Vec::new(),
            chains: Mutex::new(HashMap::new()),
        }
    }
}

impl<F: Face> FontRegistry<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a new, empty registry for sharing.
    pub fn shared() -> SharedRegistry<F> {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Register a face under `descriptor`.
    pub fn load(&mut self, descriptor: FontDescriptor, face: Arc<F>) -> FaceId {
        let id = FaceId(self.faces.len());
        log::debug!(
            "loaded face {:?}: {} {:?} {}",
            id,
            descriptor.typeface,
            descriptor.style,
            descriptor.weight.0
        );
        self.faces.push(LoadedFace { descriptor, face });
        self.chains.get_mut().clear();
        id
    }

    /// Replace the typeface preference list consulted after the requested
    /// typeface.
    pub fn set_fallback_order(&mut self, order: impl IntoIterator<Item = Typeface>) {
        self.fallback_order = order.into_iter().collect();
        self.chains.get_mut().clear();
    }

    /// Retrieve a face by id if it exists.
    pub fn get(&self, id: FaceId) -> Option<&LoadedFace<F>> {
        self.faces.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Descriptors of every loaded face, in load order.
    pub fn descriptors(&self) -> impl Iterator<Item = &FontDescriptor> + Clone {
        self.faces.iter().map(|loaded| &loaded.descriptor)
    }

    /// The loaded face closest to `want`, see [`closest_font`](crate::font::closest_font).
    pub fn closest(&self, want: &FontDescriptor) -> Option<FaceId> {
        closest_index(want, self.descriptors()).map(FaceId)
    }

    /// Faces to try, in order, when shaping text requested as `want`.
    ///
    /// The chain starts with the closest face of the requested typeface,
    /// then the closest face of each configured fallback typeface, then the
    /// closest face of every other loaded typeface in load order. The first
    /// loaded typeface therefore acts as the default font. Each typeface
    /// contributes at most one face.
    pub fn fallback_chain(&self, want: &FontDescriptor) -> Arc<[FaceId]> {
        if let Some(chain) = self.chains.lock().get(want) {
            return chain.clone();
        }

        let mut typefaces: Vec<&Typeface> = Vec::new();
        let push_typeface = |typeface: &Typeface, out: &mut Vec<FaceId>| {
            if let Some(id) = self.closest(&want.with_typeface(typeface.clone())) {
                if !out.contains(&id) {
                    out.push(id);
                }
            }
        };

        let mut chain = Vec::new();
        push_typeface(&want.typeface, &mut chain);
        for typeface in &self.fallback_order {
            push_typeface(typeface, &mut chain);
        }
        for loaded in &self.faces {
            if !typefaces.contains(&&loaded.descriptor.typeface) {
                typefaces.push(&loaded.descriptor.typeface);
            }
        }
        for typeface in typefaces {
            push_typeface(typeface, &mut chain);
        }

        log::debug!(
            "fallback chain for {} {:?} {}: {:?}",
            want.typeface,
            want.style,
            want.weight.0,
            chain
        );
        let chain: Arc<[FaceId]> = chain.into();
        self.chains.lock().insert(want.clone(), chain.clone());
        chain
    }
}
