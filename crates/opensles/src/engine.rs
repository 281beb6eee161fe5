// Engine and output mix objects
//
// OpenSL ES for Android supports a single engine per application and up to 32 objects.
// Objects must be destroyed in reverse order of creation: players, output mix, engine.

use crate::result::check;
use crate::sys::*;
use play_audio_core::{AudioError, Result};
use std::os::raw::c_void;
use std::ptr;

/// Owned OpenSL ES object, destroyed on drop
pub(crate) struct Object {
    raw: SLObjectItf,
    label: &'static str,
}

impl Object {
    /// Take ownership of an object returned by a `Create*` call
    ///
    /// # Safety
    /// `raw` must be a valid, not yet destroyed object.
    pub(crate) unsafe fn from_raw(raw: SLObjectItf, label: &'static str) -> Result<Self> {
        if raw.is_null() {
            return Err(AudioError::InitializationError(format!(
                "{} creation returned a null object",
                label
            )));
        }
        Ok(Self { raw, label })
    }

    pub(crate) fn raw(&self) -> SLObjectItf {
        self.raw
    }

    /// Synchronous realize
    pub(crate) fn realize(&self, operation: &'static str) -> Result<()> {
        let result = unsafe { ((**self.raw).Realize)(self.raw, SL_BOOLEAN_FALSE) };
        check(operation, result)?;
        Ok(())
    }

    /// Fetch an interface exposed by this object
    ///
    /// # Safety
    /// `T` must be the vtable type matching `iid`.
    pub(crate) unsafe fn interface<T>(
        &self,
        iid: SLInterfaceID,
        operation: &'static str,
    ) -> Result<*const *const T> {
        let mut itf: *const *const T = ptr::null();
        let result = ((**self.raw).GetInterface)(
            self.raw,
            iid,
            &mut itf as *mut *const *const T as *mut c_void,
        );
        check(operation, result)?;
        Ok(itf)
    }
}

impl Drop for Object {
    fn drop(&mut self) {
        log::debug!("Destroying {}", self.label);
        unsafe { ((**self.raw).Destroy)(self.raw) };
    }
}

/// The audio engine. Entry point for creating every other object.
pub struct Engine {
    engine: SLEngineItf,
    _object: Object,
}

impl Engine {
    pub fn create() -> Result<Self> {
        // slCreateEngine ignores the thread-safe and loss-of-control options on Android
        let mut raw: SLObjectItf = ptr::null();
        let result =
            unsafe { slCreateEngine(&mut raw, 0, ptr::null(), 0, ptr::null(), ptr::null()) };
        check("slCreateEngine", result)?;

        let object = unsafe { Object::from_raw(raw, "engine")? };
        object.realize("Engine::Realize")?;
        let engine =
            unsafe { object.interface::<SLEngineItf_>(SL_IID_ENGINE, "GetInterface(SL_IID_ENGINE)")? };

        log::info!("OpenSL ES engine created");
        Ok(Self {
            engine,
            _object: object,
        })
    }

    pub(crate) fn itf(&self) -> SLEngineItf {
        self.engine
    }
}

/// Final render destination shared by every player
pub struct OutputMix {
    object: Object,
}

impl OutputMix {
    pub fn create(engine: &Engine) -> Result<Self> {
        let itf = engine.itf();
        let wanted = unsafe { [SL_IID_ENVIRONMENTALREVERB] };
        let required = [SL_BOOLEAN_TRUE];

        let mut raw: SLObjectItf = ptr::null();
        let result = unsafe {
            ((**itf).CreateOutputMix)(
                itf,
                &mut raw,
                wanted.len() as SLuint32,
                wanted.as_ptr(),
                required.as_ptr(),
            )
        };
        check("CreateOutputMix", result)?;

        let object = unsafe { Object::from_raw(raw, "output mix")? };
        object.realize("OutputMix::Realize")?;

        log::info!("Output mix created");
        Ok(Self { object })
    }

    pub(crate) fn object(&self) -> SLObjectItf {
        self.object.raw()
    }
}
