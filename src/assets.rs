//! Asynchronous asset loading: the scene container and the baked texture are
//! fetched and decoded off the frame loop, then handed to the driver through
//! shared pending slots. A failed load logs an error and leaves its slot
//! empty; the driver keeps rendering without the asset.

use crate::constants::{BAKED_TEXTURE_URL, SCENE_ASSET_URL};
use crate::core::{NamedMeshes, SceneData};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type SceneSlot = Rc<RefCell<Option<(SceneData, NamedMeshes)>>>;
pub type TextureSlot = Rc<RefCell<Option<DecodedTexture>>>;

pub struct DecodedTexture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {url}: not a Response: {e:?}"))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load_scene() -> anyhow::Result<(SceneData, NamedMeshes)> {
    let bytes = fetch_bytes(SCENE_ASSET_URL).await?;
    let scene = SceneData::decode(&bytes)?;
    let slots = NamedMeshes::scan(&scene.nodes);
    for name in slots.missing() {
        log::warn!("scene asset has no {name:?} node; rendering without it");
    }
    let expected = [
        crate::core::NODE_BAKED,
        crate::core::NODE_POLE_LIGHT_A,
        crate::core::NODE_POLE_LIGHT_B,
        crate::core::NODE_PORTAL_LIGHT,
    ];
    for node in &scene.nodes {
        if !expected.contains(&node.name.as_str()) {
            log::debug!("scene asset node {:?} has no material slot", node.name);
        }
    }
    log::info!("scene asset loaded: {} nodes", scene.nodes.len());
    Ok((scene, slots))
}

async fn load_baked_texture() -> anyhow::Result<DecodedTexture> {
    let bytes = fetch_bytes(BAKED_TEXTURE_URL).await?;
    let img = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    log::info!("baked texture loaded: {width}x{height}");
    Ok(DecodedTexture {
        width,
        height,
        rgba: img.into_raw(),
    })
}

pub fn spawn_scene_load(slot: SceneSlot) {
    spawn_local(async move {
        match load_scene().await {
            Ok(loaded) => *slot.borrow_mut() = Some(loaded),
            Err(e) => log::error!("scene load error: {e:?}"),
        }
    });
}

pub fn spawn_texture_load(slot: TextureSlot) {
    spawn_local(async move {
        match load_baked_texture().await {
            Ok(tex) => *slot.borrow_mut() = Some(tex),
            Err(e) => log::error!("baked texture load error: {e:?}"),
        }
    });
}
