//! Texture-keyed geometry batching.
//!
//! Views describe primitives immediately (select a texture, reserve space,
//! write vertices and indices); the [`Batcher`] groups them into one
//! [`DrawChannel`] per texture so a frame costs one draw call per texture
//! instead of one per primitive.
//!
//! Index format is `u16`. Every channel records the vertex-buffer offset it was
//! opened at and keeps its indices relative to it, so the GPU draw uses that
//! offset as the base vertex. When a channel's local index space would exceed
//! [`CHANNEL_VERTEX_CAPACITY`], a fresh channel for the same texture is opened
//! at the current end of the vertex buffer (overflow splitting). Primitives are
//! never split: callers reserve a whole primitive at once.
//!
//! Channels live in an arena and are recycled across batches through a free
//! list, so a steady-state frame performs no channel allocation.

use std::collections::HashMap;
use std::ops::Range;

use crate::paint::Color;

use super::texture::TextureId;
use super::vertex::Vertex;

/// Number of vertices one channel can address with `u16` indices.
pub const CHANNEL_VERTEX_CAPACITY: u32 = 1 << 16;

const INDEX_SIZE: u64 = std::mem::size_of::<u16>() as u64;

/// Geometry destined for a single texture within the current batch.
#[derive(Debug)]
pub struct DrawChannel {
    texture: TextureId,
    vertex_offset: u32,
    index_offset: u64,
    indices: Vec<u16>,
}

impl DrawChannel {
    fn new(texture: TextureId, vertex_offset: u32) -> Self {
        Self {
            texture,
            vertex_offset,
            index_offset: 0,
            indices: Vec::new(),
        }
    }

    #[inline]
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Base vertex: position in the shared vertex buffer where local index 0 lives.
    #[inline]
    pub fn vertex_offset(&self) -> u32 {
        self.vertex_offset
    }

    /// Byte offset of this channel's indices in the flattened index buffer.
    ///
    /// Only meaningful after [`Batcher::flush`].
    #[inline]
    pub fn index_byte_offset(&self) -> u64 {
        self.index_offset
    }

    /// First element of this channel in the flattened index buffer.
    #[inline]
    pub fn first_index(&self) -> u32 {
        (self.index_offset / INDEX_SIZE) as u32
    }

    /// Indices relative to [`vertex_offset`](Self::vertex_offset).
    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }
}

/// Whether a batch is currently open.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BatchState {
    Idle,
    Batching,
}

/// Receiver of the draw stream produced by [`Flushed::issue`].
///
/// The GPU renderer implements this over a render pass; tests implement it with
/// a recorder.
pub trait DrawSink {
    /// Makes `texture` the source for subsequent draws.
    fn bind_texture(&mut self, texture: TextureId);

    /// Draws `indices` of the flattened index buffer, offset by `base_vertex`.
    fn draw_indexed(&mut self, indices: Range<u32>, base_vertex: i32);
}

/// Counters returned by [`Flushed::issue`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DrawStats {
    pub draw_calls: u32,
    pub texture_binds: u32,
}

/// Immediate-mode geometry accumulator.
///
/// State machine:
/// - `Idle` → first `select_texture`/`reserve` → `Batching`
/// - `Batching` → `flush` → `Idle`
///
/// `clear` is accepted in either state and does not change it.
#[derive(Debug)]
pub struct Batcher {
    state: BatchState,

    /// Texture used when none is selected (1×1 white).
    white: TextureId,
    /// Texture for the next channel opened by `reserve`.
    selected: TextureId,

    vertices: Vec<Vertex>,
    indices: Vec<u16>,

    // Channel arena + batch order + recycled slots.
    channels: Vec<DrawChannel>,
    active: Vec<usize>,
    free: Vec<usize>,

    /// Channel still accepting geometry, per texture. Reset every batch and layer.
    by_texture: HashMap<TextureId, usize>,
    current: Option<usize>,

    pending_clear: Option<Color>,
}

impl Default for Batcher {
    fn default() -> Self {
        Self::new(TextureId::WHITE)
    }
}

impl Batcher {
    /// Creates an idle batcher that substitutes `white` for "no texture".
    pub fn new(white: TextureId) -> Self {
        Self {
            state: BatchState::Idle,
            white,
            selected: white,
            vertices: Vec::new(),
            indices: Vec::new(),
            channels: Vec::new(),
            active: Vec::new(),
            free: Vec::new(),
            by_texture: HashMap::new(),
            current: None,
            pending_clear: None,
        }
    }

    #[inline]
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Channels opened in the current (or last flushed) batch.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.active.len()
    }

    /// Vertices written in the current (or last flushed) batch.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Requests a framebuffer clear at the next draw.
    pub fn clear(&mut self, color: Color) {
        self.pending_clear = Some(color);
    }

    /// Takes the clear requested since the last draw, if any.
    pub fn take_clear(&mut self) -> Option<Color> {
        self.pending_clear.take()
    }

    /// Sets the texture for subsequent primitives. `None` selects white.
    pub fn select_texture(&mut self, texture: Option<TextureId>) {
        self.ensure_batching();

        let texture = texture.unwrap_or(self.white);
        self.selected = texture;

        if let Some(cur) = self.current {
            if self.channels[cur].texture == texture {
                return;
            }
        }

        self.current = Some(self.channel_for(texture));
    }

    /// Guarantees room for `vertex_count` vertices and `index_count` indices in
    /// the current channel and returns the local index of the first new vertex.
    ///
    /// Opens a new channel for the same texture (and returns 0) when the
    /// current one cannot address `vertex_count` more vertices.
    ///
    /// # Panics
    ///
    /// If `vertex_count` exceeds [`CHANNEL_VERTEX_CAPACITY`].
    pub fn reserve(&mut self, index_count: u32, vertex_count: u32) -> u32 {
        assert!(
            vertex_count <= CHANNEL_VERTEX_CAPACITY,
            "Batcher::reserve: {vertex_count} vertices cannot be addressed by u16 indices"
        );

        self.ensure_batching();

        let mut cur = match self.current {
            Some(cur) => cur,
            None => {
                let cur = self.channel_for(self.selected);
                self.current = Some(cur);
                cur
            }
        };

        let end = self.vertices.len() as u32;
        let mut base = end - self.channels[cur].vertex_offset;
        if base + vertex_count > CHANNEL_VERTEX_CAPACITY {
            let texture = self.channels[cur].texture;
            log::debug!(
                "channel for {texture:?} full at {base} vertices; splitting at vertex {end}"
            );
            cur = self.open_channel(texture);
            self.current = Some(cur);
            base = 0;
        }

        self.vertices.reserve(vertex_count as usize);
        self.channels[cur].indices.reserve(index_count as usize);

        base
    }

    /// Appends `count` default vertices and returns them for in-place writing.
    ///
    /// # Panics
    ///
    /// If no batch is open (call [`reserve`](Self::reserve) first).
    pub fn vertex_array(&mut self, count: usize) -> &mut [Vertex] {
        self.assert_batching("vertex_array");
        let start = self.vertices.len();
        self.vertices.resize(start + count, Vertex::default());
        &mut self.vertices[start..]
    }

    /// Appends vertices to the shared vertex buffer.
    ///
    /// # Panics
    ///
    /// If no batch is open (call [`reserve`](Self::reserve) first).
    pub fn append_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Vertex>,
    {
        self.assert_batching("append_vertices");
        self.vertices.extend(vertices);
    }

    /// Appends `base + i` for every `i` to the current channel.
    ///
    /// # Panics
    ///
    /// If no channel is accepting geometry (call [`reserve`](Self::reserve) first).
    pub fn append_indices<I>(&mut self, base: u32, indices: I)
    where
        I: IntoIterator<Item = u16>,
    {
        let Some(cur) = self.current.filter(|_| self.state == BatchState::Batching) else {
            panic!("Batcher::append_indices: no channel reserved");
        };

        self.channels[cur].indices.extend(indices.into_iter().map(|i| {
            let local = base + u32::from(i);
            debug_assert!(
                local < CHANNEL_VERTEX_CAPACITY,
                "local index {local} outside the channel's u16 range"
            );
            local as u16
        }));
    }

    /// Stops merging into channels opened so far.
    ///
    /// Geometry submitted afterwards lands in new channels even when it reuses
    /// a texture, so it is drawn after everything submitted before the call.
    pub fn force_new_layer(&mut self) {
        self.by_texture.clear();
        self.current = None;
    }

    /// Closes the open batch and flattens its channels into one index buffer.
    ///
    /// Returns `None` when no batch is open or it holds no channel; the
    /// batcher is idle afterwards either way, so flushing twice in a row
    /// yields `None` the second time.
    pub fn flush(&mut self) -> Option<Flushed<'_>> {
        if self.state != BatchState::Batching {
            return None;
        }
        self.state = BatchState::Idle;

        if self.active.is_empty() {
            return None;
        }

        self.indices.clear();
        for &id in &self.active {
            let channel = &mut self.channels[id];
            channel.index_offset = self.indices.len() as u64 * INDEX_SIZE;
            self.indices.extend_from_slice(&channel.indices);
        }

        log::trace!(
            "flushed batch: {} channels, {} vertices, {} indices",
            self.active.len(),
            self.vertices.len(),
            self.indices.len()
        );

        Some(Flushed {
            vertices: &self.vertices,
            indices: &self.indices,
            channels: &self.channels,
            order: &self.active,
        })
    }

    // ── internals ──────────────────────────────────────────────────────────

    fn ensure_batching(&mut self) {
        if self.state == BatchState::Idle {
            self.begin_batch();
        }
    }

    fn begin_batch(&mut self) {
        self.vertices.clear();
        self.by_texture.clear();
        // Reverse so the next batch reopens slots in the same order.
        self.free.extend(self.active.drain(..).rev());
        self.current = None;
        self.selected = self.white;
        self.state = BatchState::Batching;
    }

    /// Channel accepting geometry for `texture`, opening one if needed.
    fn channel_for(&mut self, texture: TextureId) -> usize {
        match self.by_texture.get(&texture) {
            Some(&id) => id,
            None => self.open_channel(texture),
        }
    }

    fn open_channel(&mut self, texture: TextureId) -> usize {
        let vertex_offset = self.vertices.len() as u32;

        let id = match self.free.pop() {
            Some(id) => {
                let channel = &mut self.channels[id];
                channel.indices.clear();
                channel.texture = texture;
                channel.vertex_offset = vertex_offset;
                channel.index_offset = 0;
                id
            }
            None => {
                self.channels.push(DrawChannel::new(texture, vertex_offset));
                self.channels.len() - 1
            }
        };

        self.active.push(id);
        self.by_texture.insert(texture, id);
        id
    }

    fn assert_batching(&self, op: &str) {
        assert!(
            self.state == BatchState::Batching,
            "Batcher::{op}: no batch open; reserve geometry first"
        );
    }
}

/// A closed batch, ready for upload and submission.
///
/// Borrowed from the [`Batcher`]; the layout is valid until the next batch
/// begins.
pub struct Flushed<'a> {
    vertices: &'a [Vertex],
    indices: &'a [u16],
    channels: &'a [DrawChannel],
    order: &'a [usize],
}

impl<'a> Flushed<'a> {
    #[inline]
    pub fn vertices(&self) -> &'a [Vertex] {
        self.vertices
    }

    /// Flattened indices of every channel, in channel order.
    #[inline]
    pub fn indices(&self) -> &'a [u16] {
        self.indices
    }

    /// Channels in creation order.
    pub fn channels(&self) -> impl Iterator<Item = &'a DrawChannel> {
        let (channels, order) = (self.channels, self.order);
        order.iter().map(move |&id| &channels[id])
    }

    /// Issues one draw per non-empty channel, binding textures only on change.
    pub fn issue<S: DrawSink + ?Sized>(&self, sink: &mut S) -> DrawStats {
        let mut stats = DrawStats::default();
        let mut bound: Option<TextureId> = None;

        for channel in self.channels() {
            if channel.indices.is_empty() {
                continue;
            }

            if bound != Some(channel.texture) {
                sink.bind_texture(channel.texture);
                bound = Some(channel.texture);
                stats.texture_binds += 1;
            }

            let first = channel.first_index();
            sink.draw_indexed(
                first..first + channel.indices.len() as u32,
                channel.vertex_offset as i32,
            );
            stats.draw_calls += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: [u16; 6] = [0, 1, 2, 1, 3, 2];

    fn tex(n: u32) -> TextureId {
        TextureId(n)
    }

    fn quad(batch: &mut Batcher, texture: Option<TextureId>) {
        batch.select_texture(texture);
        let base = batch.reserve(6, 4);
        batch.append_indices(base, QUAD);
        batch.append_vertices([Vertex::default(); 4]);
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Bind(TextureId),
        Draw(Range<u32>, i32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl DrawSink for Recorder {
        fn bind_texture(&mut self, texture: TextureId) {
            self.calls.push(Call::Bind(texture));
        }

        fn draw_indexed(&mut self, indices: Range<u32>, base_vertex: i32) {
            self.calls.push(Call::Draw(indices, base_vertex));
        }
    }

    // ── state machine ─────────────────────────────────────────────────────

    #[test]
    fn starts_idle_and_select_opens_a_batch() {
        let mut batch = Batcher::default();
        assert_eq!(batch.state(), BatchState::Idle);
        batch.select_texture(Some(tex(1)));
        assert_eq!(batch.state(), BatchState::Batching);
        assert_eq!(batch.channel_count(), 1);
    }

    #[test]
    fn reserve_without_texture_uses_white() {
        let mut batch = Batcher::default();
        let base = batch.reserve(6, 4);
        assert_eq!(base, 0);

        let flushed = batch.flush().unwrap();
        let channels: Vec<_> = flushed.channels().collect();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].texture(), TextureId::WHITE);
    }

    #[test]
    fn second_flush_is_a_no_op() {
        let mut batch = Batcher::default();
        quad(&mut batch, None);
        assert!(batch.flush().is_some());
        assert!(batch.flush().is_none());
        assert_eq!(batch.state(), BatchState::Idle);
    }

    #[test]
    fn flush_without_geometry_is_a_no_op() {
        let mut batch = Batcher::default();
        assert!(batch.flush().is_none());
    }

    #[test]
    fn clear_is_independent_of_batching() {
        let mut batch = Batcher::default();
        batch.clear(Color::BLACK);
        assert_eq!(batch.state(), BatchState::Idle);

        quad(&mut batch, None);
        batch.clear(Color::RED);
        assert_eq!(batch.state(), BatchState::Batching);

        assert_eq!(batch.take_clear(), Some(Color::RED));
        assert_eq!(batch.take_clear(), None);
    }

    // ── channel selection ─────────────────────────────────────────────────

    #[test]
    fn same_texture_never_opens_a_new_channel() {
        let mut batch = Batcher::default();
        for _ in 0..10 {
            quad(&mut batch, Some(tex(3)));
        }
        assert_eq!(batch.channel_count(), 1);
    }

    #[test]
    fn returning_to_a_texture_reuses_its_channel() {
        let mut batch = Batcher::default();
        quad(&mut batch, Some(tex(1)));
        quad(&mut batch, Some(tex(2)));
        quad(&mut batch, Some(tex(1)));
        assert_eq!(batch.channel_count(), 2);

        // The third quad sits after texture 2's vertices, so its local base is 8.
        let flushed = batch.flush().unwrap();
        let first = flushed.channels().next().unwrap();
        assert_eq!(first.indices(), &[0, 1, 2, 1, 3, 2, 8, 9, 10, 9, 11, 10]);
    }

    #[test]
    fn force_new_layer_opens_fresh_channels() {
        let mut batch = Batcher::default();
        quad(&mut batch, Some(tex(1)));
        quad(&mut batch, Some(tex(2)));
        batch.force_new_layer();
        quad(&mut batch, Some(tex(1)));

        let flushed = batch.flush().unwrap();
        let textures: Vec<_> = flushed.channels().map(|c| c.texture()).collect();
        assert_eq!(textures, vec![tex(1), tex(2), tex(1)]);
    }

    #[test]
    fn force_new_layer_splits_even_the_current_texture() {
        let mut batch = Batcher::default();
        quad(&mut batch, Some(tex(1)));
        batch.force_new_layer();
        quad(&mut batch, Some(tex(1)));

        let flushed = batch.flush().unwrap();
        let offsets: Vec<_> = flushed.channels().map(|c| c.vertex_offset()).collect();
        assert_eq!(offsets, vec![0, 4]);
    }

    #[test]
    fn reserve_after_layer_keeps_selected_texture() {
        let mut batch = Batcher::default();
        quad(&mut batch, Some(tex(5)));
        batch.force_new_layer();
        let base = batch.reserve(6, 4);
        batch.append_indices(base, QUAD);
        batch.append_vertices([Vertex::default(); 4]);

        let flushed = batch.flush().unwrap();
        assert!(flushed.channels().all(|c| c.texture() == tex(5)));
        assert_eq!(flushed.channels().count(), 2);
    }

    #[test]
    fn zero_reservation_returns_a_stable_base() {
        let mut batch = Batcher::default();
        quad(&mut batch, None);
        assert_eq!(batch.reserve(0, 0), 4);
        assert_eq!(batch.reserve(0, 0), 4);
        assert_eq!(batch.channel_count(), 1);
    }

    // ── overflow splitting ────────────────────────────────────────────────

    #[test]
    fn exactly_full_channel_is_not_split() {
        let mut batch = Batcher::default();
        for _ in 0..(CHANNEL_VERTEX_CAPACITY / 4) {
            quad(&mut batch, Some(tex(1)));
        }
        assert_eq!(batch.channel_count(), 1);

        let flushed = batch.flush().unwrap();
        let max = flushed.indices().iter().copied().max().unwrap();
        assert_eq!(max, u16::MAX);
    }

    #[test]
    fn one_vertex_past_capacity_splits() {
        let mut batch = Batcher::default();
        for _ in 0..(CHANNEL_VERTEX_CAPACITY / 4) {
            quad(&mut batch, Some(tex(1)));
        }
        batch.select_texture(Some(tex(1)));
        assert_eq!(batch.reserve(3, 1), 0);
        assert_eq!(batch.channel_count(), 2);
    }

    #[test]
    fn twenty_thousand_quads_need_two_channels() {
        let mut batch = Batcher::default();
        for _ in 0..20_000 {
            quad(&mut batch, Some(tex(7)));
        }

        let flushed = batch.flush().unwrap();
        assert_eq!(flushed.vertices().len(), 80_000);

        let channels: Vec<_> = flushed.channels().collect();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].vertex_offset(), 0);
        assert_eq!(channels[1].vertex_offset(), CHANNEL_VERTEX_CAPACITY);

        let mut rec = Recorder::default();
        let stats = flushed.issue(&mut rec);
        assert_eq!(stats.draw_calls, 2);
        assert_eq!(stats.texture_binds, 1);
    }

    #[test]
    fn channel_count_is_ceil_of_vertices_over_capacity() {
        for quads in [1u32, 16_384, 16_385, 40_000, 49_152] {
            let mut batch = Batcher::default();
            for _ in 0..quads {
                quad(&mut batch, None);
            }
            let expected = (quads * 4).div_ceil(CHANNEL_VERTEX_CAPACITY) as usize;
            assert_eq!(batch.channel_count(), expected, "{quads} quads");
        }
    }

    #[test]
    #[should_panic(expected = "cannot be addressed")]
    fn oversized_reservation_panics() {
        let mut batch = Batcher::default();
        batch.reserve(0, CHANNEL_VERTEX_CAPACITY + 1);
    }

    // ── flattening ────────────────────────────────────────────────────────

    #[test]
    fn byte_offsets_replay_the_flattened_buffer() {
        let mut batch = Batcher::default();
        quad(&mut batch, Some(tex(1)));
        quad(&mut batch, Some(tex(2)));
        quad(&mut batch, Some(tex(1)));
        quad(&mut batch, Some(tex(3)));

        let flushed = batch.flush().unwrap();
        let total: usize = flushed.channels().map(|c| c.indices().len()).sum();
        assert_eq!(flushed.indices().len(), total);

        for channel in flushed.channels() {
            let start = (channel.index_byte_offset() / 2) as usize;
            let slice = &flushed.indices()[start..start + channel.indices().len()];
            assert_eq!(slice, channel.indices());
        }
    }

    #[test]
    fn vertices_upload_in_submission_order() {
        let mut batch = Batcher::default();
        for i in 0..5u32 {
            batch.select_texture(Some(tex(i % 2)));
            let base = batch.reserve(3, 3);
            batch.append_indices(base, [0, 1, 2]);
            for v in batch.vertex_array(3) {
                v.color = i;
            }
        }

        let flushed = batch.flush().unwrap();
        let colors: Vec<_> = flushed.vertices().iter().map(|v| v.color).collect();
        assert_eq!(colors, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
    }

    // ── issue ─────────────────────────────────────────────────────────────

    #[test]
    fn white_quad_then_textured_quad() {
        let mut batch = Batcher::default();
        quad(&mut batch, None);
        quad(&mut batch, Some(tex(9)));

        let flushed = batch.flush().unwrap();
        assert_eq!(flushed.channels().count(), 2);
        assert_eq!(flushed.vertices().len(), 8);
        assert_eq!(flushed.indices().len(), 12);

        let mut rec = Recorder::default();
        let stats = flushed.issue(&mut rec);
        assert_eq!(stats, DrawStats { draw_calls: 2, texture_binds: 2 });
        assert_eq!(
            rec.calls,
            vec![
                Call::Bind(TextureId::WHITE),
                Call::Draw(0..6, 0),
                Call::Bind(tex(9)),
                Call::Draw(6..12, 4),
            ]
        );
    }

    #[test]
    fn consecutive_channels_with_same_texture_bind_once() {
        let mut batch = Batcher::default();
        quad(&mut batch, Some(tex(1)));
        batch.force_new_layer();
        quad(&mut batch, Some(tex(1)));

        let flushed = batch.flush().unwrap();
        let mut rec = Recorder::default();
        let stats = flushed.issue(&mut rec);
        assert_eq!(stats, DrawStats { draw_calls: 2, texture_binds: 1 });
    }

    #[test]
    fn empty_channels_are_skipped() {
        let mut batch = Batcher::default();
        batch.select_texture(Some(tex(1)));
        quad(&mut batch, Some(tex(2)));

        let flushed = batch.flush().unwrap();
        assert_eq!(flushed.channels().count(), 2);

        let mut rec = Recorder::default();
        flushed.issue(&mut rec);
        assert_eq!(rec.calls, vec![Call::Bind(tex(2)), Call::Draw(0..6, 0)]);
    }

    // ── channel recycling ─────────────────────────────────────────────────

    #[test]
    fn channels_are_recycled_across_batches() {
        let mut batch = Batcher::default();
        for _ in 0..3 {
            quad(&mut batch, Some(tex(1)));
            quad(&mut batch, Some(tex(2)));
            assert!(batch.flush().is_some());
        }
        assert_eq!(batch.channels.len(), 2);
    }

    #[test]
    fn recycled_channel_starts_empty() {
        let mut batch = Batcher::default();
        quad(&mut batch, Some(tex(1)));
        quad(&mut batch, Some(tex(1)));
        assert!(batch.flush().is_some());

        quad(&mut batch, Some(tex(4)));
        let flushed = batch.flush().unwrap();
        let channel = flushed.channels().next().unwrap();
        assert_eq!(channel.texture(), tex(4));
        assert_eq!(channel.vertex_offset(), 0);
        assert_eq!(channel.indices(), &QUAD);
    }

    #[test]
    fn new_batch_forgets_previous_selection() {
        let mut batch = Batcher::default();
        quad(&mut batch, Some(tex(1)));
        assert!(batch.flush().is_some());

        batch.reserve(6, 4);
        let flushed = batch.flush().unwrap();
        assert_eq!(flushed.channels().next().unwrap().texture(), TextureId::WHITE);
    }

    // ── preconditions ─────────────────────────────────────────────────────

    #[test]
    #[should_panic(expected = "no channel reserved")]
    fn indices_without_reservation_panic() {
        let mut batch = Batcher::default();
        batch.append_indices(0, QUAD);
    }

    #[test]
    #[should_panic(expected = "no batch open")]
    fn vertices_after_flush_panic() {
        let mut batch = Batcher::default();
        quad(&mut batch, None);
        let _ = batch.flush();
        batch.vertex_array(4);
    }
}
