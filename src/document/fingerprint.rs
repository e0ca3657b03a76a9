use xxhash_rust::xxh3::Xxh3;

use crate::content::animation::{Curve, KeyframeTrack, ParamValue};
use crate::content::color::Color;
use crate::content::transform::Transform;
use crate::document::context::Document;
use crate::foundation::core::Vec2;
use crate::resources::model::Resource;
use crate::time::range::TimeRange;
use crate::timeline::element::{ElementKind, TimelineElement};

const XXH3_SEED: u64 = 0x43f1_9e2d_5a07_b6c8;

/// Stable 128-bit content hash of a validated document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for DocumentFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub(crate) fn fingerprint_document(doc: &Document) -> DocumentFingerprint {
    let mut h = StableHasher::new();
    h.write_str(&doc.config().name);

    let resources = doc.registry().resources();
    h.write_len(resources.len());
    for res in resources {
        write_resource(&mut h, res);
    }

    h.write_len(doc.sequences().len());
    for seq in doc.sequences() {
        h.write_str(seq.name());
        h.write_u32(seq.format().index());
        let tl = seq.timeline();
        h.write_u64(tl.total().frames());
        h.write_u32(tl.config().max_lanes);
        h.write_bool(tl.config().allow_gaps);
        h.write_bool(tl.config().allow_overlaps);
        h.write_len(tl.len());
        for el in tl.elements() {
            write_element(&mut h, el);
        }
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_i32(&mut self, v: i32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_len(&mut self, n: usize) {
        self.write_u64(n as u64);
    }

    // Length-prefixed so adjacent strings cannot alias.
    fn write_str(&mut self, s: &str) {
        self.write_len(s.len());
        self.write_bytes(s.as_bytes());
    }

    fn write_opt_str(&mut self, s: Option<&str>) {
        match s {
            Some(s) => {
                self.write_u8(1);
                self.write_str(s);
            }
            None => self.write_u8(0),
        }
    }

    fn write_vec2(&mut self, v: Vec2) {
        self.write_f64(v.x);
        self.write_f64(v.y);
    }

    fn finish(self) -> DocumentFingerprint {
        let v = self.inner.digest128();
        DocumentFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_resource(h: &mut StableHasher, res: &Resource) {
    h.write_u32(res.id().index());
    match res {
        Resource::Asset(a) => {
            h.write_u8(0);
            h.write_str(a.name());
            h.write_str(a.src());
            h.write_str(a.media().as_str());
            h.write_u64(a.start().frames());
            h.write_u64(a.duration().frames());
            h.write_bool(a.has_video());
            h.write_bool(a.has_audio());
            h.write_u32(a.format().map_or(0, |f| f.index()));
            match a.audio() {
                Some(audio) => {
                    h.write_u8(1);
                    h.write_u32(audio.sources);
                    h.write_u32(audio.channels);
                    h.write_u32(audio.rate.hz());
                }
                None => h.write_u8(0),
            }
        }
        Resource::Format(f) => {
            h.write_u8(1);
            h.write_opt_str(f.name());
            h.write_str(f.media().as_str());
            h.write_u32(f.width());
            h.write_u32(f.height());
            h.write_str(f.color_space().wire());
            match f.frame_duration() {
                Some(fd) => {
                    h.write_u8(1);
                    h.write_u64(fd.num());
                    h.write_u64(fd.den());
                }
                None => h.write_u8(0),
            }
        }
        Resource::Effect(e) => {
            h.write_u8(2);
            h.write_str(e.name());
            h.write_str(e.uid());
        }
    }
}

fn write_range(h: &mut StableHasher, r: TimeRange) {
    h.write_u64(r.start().frames());
    h.write_u64(r.end().frames());
}

fn write_transform(h: &mut StableHasher, t: &Transform) {
    h.write_vec2(t.position);
    h.write_vec2(t.scale);
    h.write_f64(t.rotation);
    h.write_vec2(t.anchor);
}

fn write_color(h: &mut StableHasher, c: &Color) {
    h.write_len(c.components().len());
    for &v in c.components() {
        h.write_f64(v);
    }
}

fn write_track(h: &mut StableHasher, track: &KeyframeTrack) {
    h.write_str(track.param.wire());
    h.write_len(track.keyframes.len());
    for kf in &track.keyframes {
        h.write_u64(kf.time.frames());
        match kf.value {
            ParamValue::Scalar(v) => {
                h.write_u8(0);
                h.write_f64(v);
            }
            ParamValue::Pair(v) => {
                h.write_u8(1);
                h.write_vec2(v);
            }
        }
        h.write_u8(match kf.curve {
            Curve::Linear => 0,
            Curve::Smooth => 1,
            Curve::Hold => 2,
        });
    }
}

fn write_element(h: &mut StableHasher, el: &TimelineElement) {
    h.write_str(el.id());
    write_range(h, el.range());
    h.write_i32(el.lane().get());
    h.write_str(el.kind().kind_name());
    h.write_u32(el.kind().reference().map_or(0, |r| r.index()));
    if let ElementKind::Title { text, .. } = el.kind() {
        h.write_str(&text.text);
        h.write_str(&text.style.font);
        h.write_f64(text.style.font_size);
        h.write_f64(text.style.line_spacing.unwrap_or(-1.0));
        write_color(h, &text.style.color);
        h.write_str(text.style.alignment.wire());
        h.write_bool(text.style.bold);
        h.write_bool(text.style.italic);
    }
    h.write_opt_str(el.name());
    write_transform(h, el.transform());
    h.write_f64(el.opacity());
    h.write_len(el.animations().len());
    for track in el.animations() {
        write_track(h, track);
    }
    h.write_len(el.attributes().len());
    for (k, v) in el.attributes() {
        h.write_str(k);
        h.write_str(v);
    }
}
