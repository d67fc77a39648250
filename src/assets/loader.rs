//! Background OBJ loading.
//!
//! [`AssetLoader::load_obj`] parses the file on a worker thread and reports
//! through one channel: any number of [`AssetEvent::Progress`] events, then
//! exactly one terminal [`AssetEvent::Loaded`] or [`AssetEvent::Failed`].

use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::thread;

use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::{FutureExt, Stream, StreamExt};

use super::error::{AssetError, AssetResult};
use crate::gfx::geometry::{BoundingBox, GeometryData};

/// Uniform scale the resort applies to its hero model.
pub const DEFAULT_MODEL_SCALE: f32 = 50.0;

/// A parsed model, one [`GeometryData`] per OBJ object.
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub name: String,
    pub meshes: Vec<GeometryData>,
    /// Bounds of the raw vertex data, before `scale`
    pub local_bounds: BoundingBox,
    pub scale: f32,
}

impl LoadedAsset {
    /// World bounds once the uniform scale is applied
    pub fn bounds(&self) -> BoundingBox {
        self.local_bounds.scaled(self.scale)
    }

    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(GeometryData::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(GeometryData::triangle_count).sum()
    }
}

/// Everything a load reports.
#[derive(Debug)]
pub enum AssetEvent {
    /// Fraction of the file's objects converted so far, in `0.0..=1.0`
    Progress(f32),
    Loaded(LoadedAsset),
    Failed(AssetError),
}

impl AssetEvent {
    /// True for the last event of a load
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AssetEvent::Progress(_))
    }
}

pub struct AssetLoader;

impl AssetLoader {
    /// Starts loading `path` on a worker thread.
    ///
    /// The returned handle sees every event of this load and nothing else.
    /// Dropping it early is fine; the worker's later sends are discarded.
    pub fn load_obj(path: impl AsRef<Path>, scale: f32) -> AssetHandle {
        let path = path.as_ref().to_path_buf();
        let (sender, events) = mpsc::unbounded();

        let worker_sender = sender.clone();
        let spawned = thread::Builder::new()
            .name("asset-loader".to_string())
            .spawn(move || {
                let event = match load_obj_blocking(&path, scale, |fraction| {
                    let _ = worker_sender.unbounded_send(AssetEvent::Progress(fraction));
                }) {
                    Ok(asset) => AssetEvent::Loaded(asset),
                    Err(err) => AssetEvent::Failed(err),
                };
                let _ = worker_sender.unbounded_send(event);
            });

        if let Err(err) = spawned {
            let _ = sender.unbounded_send(AssetEvent::Failed(AssetError::Spawn(err)));
        }

        AssetHandle { events }
    }
}

/// Receiving end of one load.
pub struct AssetHandle {
    events: UnboundedReceiver<AssetEvent>,
}

impl AssetHandle {
    /// Waits for the next event. `None` once the load has finished.
    pub async fn next_event(&mut self) -> Option<AssetEvent> {
        self.events.next().await
    }

    /// Returns an already-delivered event without waiting, for render loops
    /// that poll once per frame.
    pub fn poll_event(&mut self) -> Option<AssetEvent> {
        self.events.next().now_or_never().flatten()
    }

    /// Drains the load and returns its outcome. Progress is logged.
    pub async fn finish(mut self) -> AssetResult<LoadedAsset> {
        while let Some(event) = self.next_event().await {
            match event {
                AssetEvent::Progress(fraction) => {
                    log::debug!("Asset loading {:.0}%", fraction * 100.0)
                }
                AssetEvent::Loaded(asset) => return Ok(asset),
                AssetEvent::Failed(err) => return Err(err),
            }
        }
        Err(AssetError::Disconnected)
    }

    /// Blocks the calling thread until the load finishes
    pub fn wait(self) -> AssetResult<LoadedAsset> {
        pollster::block_on(self.finish())
    }
}

impl Stream for AssetHandle {
    type Item = AssetEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.events.poll_next_unpin(cx)
    }
}

/// Loads and converts an OBJ on the current thread, calling `progress` after
/// each object.
pub fn load_obj_blocking(
    path: &Path,
    scale: f32,
    mut progress: impl FnMut(f32),
) -> AssetResult<LoadedAsset> {
    let display_path = path.display().to_string();
    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| AssetError::Obj {
        path: display_path.clone(),
        source,
    })?;

    // Materials come from the resort palette, so a missing MTL is not fatal
    if let Err(err) = materials {
        log::debug!("No MTL for {}: {}", display_path, err);
    }

    let total = models.len();
    let mut meshes = Vec::with_capacity(total);
    let mut local_bounds = BoundingBox::empty();

    for (i, model) in models.iter().enumerate() {
        let geometry = mesh_to_geometry(&model.mesh);
        local_bounds |= geometry.bounds();
        meshes.push(geometry);
        progress((i + 1) as f32 / total as f32);
    }

    if local_bounds.is_empty() {
        log::warn!("{} has no geometry", display_path);
        return Err(AssetError::Empty { path: display_path });
    }

    let name = models
        .iter()
        .map(|model| model.name.as_str())
        .find(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| file_stem(path));

    Ok(LoadedAsset {
        name,
        meshes,
        local_bounds,
        scale,
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string())
}

fn mesh_to_geometry(mesh: &tobj::Mesh) -> GeometryData {
    let vertices: Vec<[f32; 3]> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| [p[0], p[1], p[2]])
        .collect();

    let normals = if mesh.normals.len() == mesh.positions.len() {
        mesh.normals
            .chunks_exact(3)
            .map(|n| [n[0], n[1], n[2]])
            .collect()
    } else {
        vertex_normals(&vertices, &mesh.indices)
    };

    let tex_coords = if mesh.texcoords.len() / 2 == vertices.len() {
        mesh.texcoords.chunks_exact(2).map(|t| [t[0], t[1]]).collect()
    } else {
        vec![[0.0, 0.0]; vertices.len()]
    };

    GeometryData {
        vertices,
        tex_coords,
        normals,
        indices: mesh.indices.clone(),
    }
}

/// Area-weighted vertex normals for meshes that ship without them.
pub(crate) fn vertex_normals(vertices: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![[0.0f32; 3]; vertices.len()];

    for triangle in indices.chunks_exact(3) {
        let [i0, i1, i2] = [
            triangle[0] as usize,
            triangle[1] as usize,
            triangle[2] as usize,
        ];
        if i0 >= vertices.len() || i1 >= vertices.len() || i2 >= vertices.len() {
            continue;
        }
        let (v0, v1, v2) = (vertices[i0], vertices[i1], vertices[i2]);
        let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
        let face = [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ];
        for &index in &[i0, i1, i2] {
            for axis in 0..3 {
                normals[index][axis] += face[axis];
            }
        }
    }

    for normal in &mut normals {
        let length = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
        *normal = if length > 0.0 {
            [normal[0] / length, normal[1] / length, normal[2] / length]
        } else {
            [0.0, 1.0, 0.0]
        };
    }

    normals
}
