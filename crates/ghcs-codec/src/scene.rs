use ghcs_geom::{ConvexHull2D, ConvexPoly2D, Geometry, Plane2D, Vec2};
use ghcs_io::{ByteReader, ByteWriter, Endian};

use crate::chunk::{ChunkInfo, ChunkKind};
use crate::{header, toc, CodecError};

/// A loaded or in-memory-assembled GHCS scene: the world AABB plus
/// every geometry paired from its polygon/hull chunk entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub world_min: Vec2,
    pub world_max: Vec2,
    pub geometries: Vec<Geometry>,
}

impl Scene {
    #[must_use]
    pub fn new(world_min: Vec2, world_max: Vec2, geometries: Vec<Geometry>) -> Self {
        Self {
            world_min,
            world_max,
            geometries,
        }
    }
}

pub(crate) fn write_scene(scene: &Scene, endian: Endian) -> Result<Vec<u8>, CodecError> {
    let mut w = ByteWriter::new(endian);
    let toc_offset_location = header::write_header(&mut w)?;

    let mut chunks: Vec<ChunkInfo> = Vec::with_capacity(3);
    chunks.push(write_convex_polys_chunk(&mut w, scene, endian)?);
    chunks.push(write_convex_hulls_chunk(&mut w, scene, endian)?);
    chunks.push(write_scene_info_chunk(&mut w, scene)?);

    w.set_endian(endian);
    let toc_location = w.total_size();
    toc::write_toc(&mut w, &chunks)?;

    w.write_uint32_at(toc_offset_location, toc_location as u32)?;
    Ok(w.into_bytes())
}

fn write_convex_polys_chunk(w: &mut ByteWriter, scene: &Scene, caller_endian: Endian) -> Result<ChunkInfo, CodecError> {
    let offset = w.total_size() as u32;
    w.set_endian(Endian::Little);
    let size_location = toc::write_chunk_prefix(w, ChunkKind::ConvexPolys.tag())?;
    let payload_start = w.total_size();

    let n: u32 = scene
        .geometries
        .len()
        .try_into()
        .expect("geometry count fits in a u32 for any realistic scene");
    w.append_uint32(n)?;
    for geom in &scene.geometries {
        let verts = geom.polygon().vertices();
        let count: i16 = verts
            .len()
            .try_into()
            .expect("vertex count fits in an i16 for any realistic polygon");
        w.append_int16(count)?;
        for v in verts {
            w.append_vec2(*v)?;
        }
    }

    let payload_size = (w.total_size() - payload_start) as u32;
    w.write_uint32_at(size_location, payload_size)?;
    w.set_endian(caller_endian);

    Ok(ChunkInfo {
        kind_tag: ChunkKind::ConvexPolys.tag(),
        offset,
        payload_size,
    })
}

fn write_convex_hulls_chunk(w: &mut ByteWriter, scene: &Scene, caller_endian: Endian) -> Result<ChunkInfo, CodecError> {
    w.set_endian(caller_endian);
    let offset = w.total_size() as u32;
    let size_location = toc::write_chunk_prefix(w, ChunkKind::ConvexHulls.tag())?;
    let payload_start = w.total_size();

    let m: u32 = scene
        .geometries
        .len()
        .try_into()
        .expect("geometry count fits in a u32 for any realistic scene");
    w.append_uint32(m)?;
    for geom in &scene.geometries {
        let planes = geom.hull().planes();
        let count: i16 = planes
            .len()
            .try_into()
            .expect("plane count fits in an i16 for any realistic hull");
        w.append_int16(count)?;
        for plane in planes {
            w.append_vec2(plane.n)?;
            w.append_float(plane.d)?;
        }
    }

    let payload_size = (w.total_size() - payload_start) as u32;
    w.write_uint32_at(size_location, payload_size)?;

    Ok(ChunkInfo {
        kind_tag: ChunkKind::ConvexHulls.tag(),
        offset,
        payload_size,
    })
}

fn write_scene_info_chunk(w: &mut ByteWriter, scene: &Scene) -> Result<ChunkInfo, CodecError> {
    let offset = w.total_size() as u32;
    w.set_endian(Endian::Little);
    let size_location = toc::write_chunk_prefix(w, ChunkKind::SceneInfo.tag())?;
    let payload_start = w.total_size();

    w.append_float(scene.world_min.x)?;
    w.append_float(scene.world_min.y)?;
    w.append_float(scene.world_max.x)?;
    w.append_float(scene.world_max.y)?;

    let payload_size = (w.total_size() - payload_start) as u32;
    w.write_uint32_at(size_location, payload_size)?;

    Ok(ChunkInfo {
        kind_tag: ChunkKind::SceneInfo.tag(),
        offset,
        payload_size,
    })
}

pub(crate) fn read_scene(data: &[u8]) -> Result<Scene, CodecError> {
    let mut r = ByteReader::new(data, Endian::Native);
    let parsed_header = header::read_header(&mut r)?;
    let entries = toc::read_toc(&mut r, parsed_header.toc_offset)?;

    let mut world: Option<(Vec2, Vec2)> = None;
    let mut polys: Vec<ConvexPoly2D> = Vec::new();
    let mut hulls: Vec<ConvexHull2D> = Vec::new();

    for entry in &entries {
        match ChunkKind::from(entry.kind_tag) {
            ChunkKind::SceneInfo => {
                toc::read_chunk_prefix(&mut r, entry.offset, ChunkKind::SceneInfo.tag())?;
                let min_x = r.parse_float()?;
                let min_y = r.parse_float()?;
                let max_x = r.parse_float()?;
                let max_y = r.parse_float()?;
                world = Some((Vec2::new(min_x, min_y), Vec2::new(max_x, max_y)));
            }
            ChunkKind::ConvexPolys => {
                toc::read_chunk_prefix(&mut r, entry.offset, ChunkKind::ConvexPolys.tag())?;
                let count = r.parse_uint32()?;
                polys.reserve(count as usize);
                for _ in 0..count {
                    let num_verts = r.parse_int16()?;
                    if num_verts < 3 {
                        return Err(CodecError::ChunkMalformed {
                            chunk_type: ChunkKind::ConvexPolys.tag(),
                            reason: format!("polygon has {num_verts} vertices, need at least 3"),
                        });
                    }
                    let mut verts = Vec::with_capacity(num_verts as usize);
                    for _ in 0..num_verts {
                        verts.push(r.parse_vec2()?);
                    }
                    polys.push(ConvexPoly2D::from_vertices_unchecked(verts));
                }
            }
            ChunkKind::ConvexHulls => {
                toc::read_chunk_prefix(&mut r, entry.offset, ChunkKind::ConvexHulls.tag())?;
                let count = r.parse_uint32()?;
                hulls.reserve(count as usize);
                for _ in 0..count {
                    let num_planes = r.parse_int16()?;
                    if num_planes < 3 {
                        return Err(CodecError::ChunkMalformed {
                            chunk_type: ChunkKind::ConvexHulls.tag(),
                            reason: format!("hull has {num_planes} planes, need at least 3"),
                        });
                    }
                    let mut planes = Vec::with_capacity(num_planes as usize);
                    for _ in 0..num_planes {
                        let n = r.parse_vec2()?;
                        let d = r.parse_float()?;
                        planes.push(Plane2D::new(n, d));
                    }
                    hulls.push(ConvexHull2D::from_planes(planes));
                }
            }
            ChunkKind::Reserved | ChunkKind::Unknown(_) => {
                log::debug!("skipping unrecognized chunk type {}", entry.kind_tag);
            }
        }
    }

    let (world_min, world_max) = world.ok_or_else(|| CodecError::ChunkMalformed {
        chunk_type: ChunkKind::SceneInfo.tag(),
        reason: "file has no SceneInfo chunk".to_string(),
    })?;

    if polys.len() != hulls.len() {
        return Err(CodecError::ChunkMalformed {
            chunk_type: ChunkKind::ConvexHulls.tag(),
            reason: format!(
                "{} polygons but {} hulls; hull at index j must pair with polygon at index j",
                polys.len(),
                hulls.len()
            ),
        });
    }

    let mut geometries = Vec::with_capacity(polys.len());
    for (poly, hull) in polys.into_iter().zip(hulls) {
        let geometry = Geometry::from_parts(poly, hull).map_err(|e| CodecError::ChunkMalformed {
            chunk_type: ChunkKind::ConvexHulls.tag(),
            reason: e.to_string(),
        })?;
        geometries.push(geometry);
    }

    Ok(Scene::new(world_min, world_max, geometries))
}
