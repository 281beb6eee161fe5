// Raw OpenSL ES 1.0.1 declarations (plus the Android configuration extension)
//
// Only the subset the player touches is declared. Interface vtables list members in
// header order up to the last one called; trailing members are omitted because the
// tables are only ever read through pointers handed out by the library.

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals, dead_code)]

use std::os::raw::c_void;

pub type SLint16 = i16;
pub type SLuint16 = u16;
pub type SLint32 = i32;
pub type SLuint32 = u32;
pub type SLboolean = SLuint32;
pub type SLchar = u8;
pub type SLresult = SLuint32;
pub type SLpermille = SLint16;
pub type SLmillisecond = SLuint32;

pub const SL_BOOLEAN_FALSE: SLboolean = 0x0000_0000;
pub const SL_BOOLEAN_TRUE: SLboolean = 0x0000_0001;

pub const SL_RESULT_SUCCESS: SLresult = 0x0000_0000;
pub const SL_RESULT_PRECONDITIONS_VIOLATED: SLresult = 0x0000_0001;
pub const SL_RESULT_PARAMETER_INVALID: SLresult = 0x0000_0002;
pub const SL_RESULT_MEMORY_FAILURE: SLresult = 0x0000_0003;
pub const SL_RESULT_RESOURCE_ERROR: SLresult = 0x0000_0004;
pub const SL_RESULT_RESOURCE_LOST: SLresult = 0x0000_0005;
pub const SL_RESULT_IO_ERROR: SLresult = 0x0000_0006;
pub const SL_RESULT_BUFFER_INSUFFICIENT: SLresult = 0x0000_0007;
pub const SL_RESULT_CONTENT_CORRUPTED: SLresult = 0x0000_0008;
pub const SL_RESULT_CONTENT_UNSUPPORTED: SLresult = 0x0000_0009;
pub const SL_RESULT_CONTENT_NOT_FOUND: SLresult = 0x0000_000A;
pub const SL_RESULT_PERMISSION_DENIED: SLresult = 0x0000_000B;
pub const SL_RESULT_FEATURE_UNSUPPORTED: SLresult = 0x0000_000C;
pub const SL_RESULT_INTERNAL_ERROR: SLresult = 0x0000_000D;
pub const SL_RESULT_UNKNOWN_ERROR: SLresult = 0x0000_000E;
pub const SL_RESULT_OPERATION_ABORTED: SLresult = 0x0000_000F;
pub const SL_RESULT_CONTROL_LOST: SLresult = 0x0000_0010;

pub const SL_PLAYSTATE_STOPPED: SLuint32 = 0x0000_0001;
pub const SL_PLAYSTATE_PAUSED: SLuint32 = 0x0000_0002;
pub const SL_PLAYSTATE_PLAYING: SLuint32 = 0x0000_0003;

pub const SL_PLAYEVENT_HEADATEND: SLuint32 = 0x0000_0001;
pub const SL_PLAYEVENT_HEADATMARKER: SLuint32 = 0x0000_0002;
pub const SL_PLAYEVENT_HEADATNEWPOS: SLuint32 = 0x0000_0004;
pub const SL_PLAYEVENT_HEADMOVING: SLuint32 = 0x0000_0008;
pub const SL_PLAYEVENT_HEADSTALLED: SLuint32 = 0x0000_0010;

pub const SL_PREFETCHEVENT_STATUSCHANGE: SLuint32 = 0x0000_0001;
pub const SL_PREFETCHEVENT_FILLLEVELCHANGE: SLuint32 = 0x0000_0002;

pub const SL_PREFETCHSTATUS_UNDERFLOW: SLuint32 = 0x0000_0001;
pub const SL_PREFETCHSTATUS_SUFFICIENTDATA: SLuint32 = 0x0000_0002;
pub const SL_PREFETCHSTATUS_OVERFLOW: SLuint32 = 0x0000_0003;

pub const SL_DATALOCATOR_URI: SLuint32 = 0x0000_0001;
pub const SL_DATALOCATOR_OUTPUTMIX: SLuint32 = 0x0000_0004;
pub const SL_DATAFORMAT_MIME: SLuint32 = 0x0000_0001;
pub const SL_CONTAINERTYPE_UNSPECIFIED: SLuint32 = 0x0000_0001;

/// Key for `SLAndroidConfigurationItf::SetConfiguration`, value is an `SLint32` stream type
pub const SL_ANDROID_KEY_STREAM_TYPE: &[u8] = b"androidPlaybackStreamType\0";

#[repr(C)]
pub struct SLInterfaceID_ {
    pub time_low: SLuint32,
    pub time_mid: SLuint16,
    pub time_hi_and_version: SLuint16,
    pub clock_seq: SLuint16,
    pub node: [u8; 6],
}
pub type SLInterfaceID = *const SLInterfaceID_;

#[repr(C)]
pub struct SLEngineOption {
    pub feature: SLuint32,
    pub data: SLuint32,
}

#[repr(C)]
pub struct SLDataLocator_URI {
    pub locatorType: SLuint32,
    pub URI: *mut SLchar,
}

#[repr(C)]
pub struct SLDataFormat_MIME {
    pub formatType: SLuint32,
    pub mimeType: *mut SLchar,
    pub containerType: SLuint32,
}

#[repr(C)]
pub struct SLDataLocator_OutputMix {
    pub locatorType: SLuint32,
    pub outputMix: SLObjectItf,
}

#[repr(C)]
pub struct SLDataSource {
    pub pLocator: *mut c_void,
    pub pFormat: *mut c_void,
}

#[repr(C)]
pub struct SLDataSink {
    pub pLocator: *mut c_void,
    pub pFormat: *mut c_void,
}

pub type SLObjectItf = *const *const SLObjectItf_;
pub type SLEngineItf = *const *const SLEngineItf_;
pub type SLPlayItf = *const *const SLPlayItf_;
pub type SLPrefetchStatusItf = *const *const SLPrefetchStatusItf_;
pub type SLPlaybackRateItf = *const *const c_void;
pub type SLAndroidConfigurationItf = *const *const SLAndroidConfigurationItf_;

pub type slPlayCallback =
    unsafe extern "C" fn(caller: SLPlayItf, pContext: *mut c_void, event: SLuint32);
pub type slPrefetchCallback =
    unsafe extern "C" fn(caller: SLPrefetchStatusItf, pContext: *mut c_void, event: SLuint32);

#[repr(C)]
pub struct SLObjectItf_ {
    pub Realize: unsafe extern "C" fn(this: SLObjectItf, async_: SLboolean) -> SLresult,
    pub Resume: *const c_void,
    pub GetState: unsafe extern "C" fn(this: SLObjectItf, pState: *mut SLuint32) -> SLresult,
    pub GetInterface: unsafe extern "C" fn(
        this: SLObjectItf,
        iid: SLInterfaceID,
        pInterface: *mut c_void,
    ) -> SLresult,
    pub RegisterCallback: *const c_void,
    pub AbortAsyncOperation: *const c_void,
    pub Destroy: unsafe extern "C" fn(this: SLObjectItf),
}

#[repr(C)]
pub struct SLEngineItf_ {
    pub CreateLEDDevice: *const c_void,
    pub CreateVibraDevice: *const c_void,
    pub CreateAudioPlayer: unsafe extern "C" fn(
        this: SLEngineItf,
        pPlayer: *mut SLObjectItf,
        pAudioSrc: *mut SLDataSource,
        pAudioSnk: *mut SLDataSink,
        numInterfaces: SLuint32,
        pInterfaceIds: *const SLInterfaceID,
        pInterfaceRequired: *const SLboolean,
    ) -> SLresult,
    pub CreateAudioRecorder: *const c_void,
    pub CreateMidiPlayer: *const c_void,
    pub CreateListener: *const c_void,
    pub Create3DGroup: *const c_void,
    pub CreateOutputMix: unsafe extern "C" fn(
        this: SLEngineItf,
        pMix: *mut SLObjectItf,
        numInterfaces: SLuint32,
        pInterfaceIds: *const SLInterfaceID,
        pInterfaceRequired: *const SLboolean,
    ) -> SLresult,
}

#[repr(C)]
pub struct SLPlayItf_ {
    pub SetPlayState: unsafe extern "C" fn(this: SLPlayItf, state: SLuint32) -> SLresult,
    pub GetPlayState: unsafe extern "C" fn(this: SLPlayItf, pState: *mut SLuint32) -> SLresult,
    pub GetDuration: unsafe extern "C" fn(this: SLPlayItf, pMsec: *mut SLmillisecond) -> SLresult,
    pub GetPosition: unsafe extern "C" fn(this: SLPlayItf, pMsec: *mut SLmillisecond) -> SLresult,
    pub RegisterCallback: unsafe extern "C" fn(
        this: SLPlayItf,
        callback: Option<slPlayCallback>,
        pContext: *mut c_void,
    ) -> SLresult,
    pub SetCallbackEventsMask:
        unsafe extern "C" fn(this: SLPlayItf, eventFlags: SLuint32) -> SLresult,
}

#[repr(C)]
pub struct SLPrefetchStatusItf_ {
    pub GetPrefetchStatus:
        unsafe extern "C" fn(this: SLPrefetchStatusItf, pStatus: *mut SLuint32) -> SLresult,
    pub GetFillLevel:
        unsafe extern "C" fn(this: SLPrefetchStatusItf, pLevel: *mut SLpermille) -> SLresult,
    pub RegisterCallback: unsafe extern "C" fn(
        this: SLPrefetchStatusItf,
        callback: Option<slPrefetchCallback>,
        pContext: *mut c_void,
    ) -> SLresult,
    pub SetCallbackEventsMask:
        unsafe extern "C" fn(this: SLPrefetchStatusItf, eventFlags: SLuint32) -> SLresult,
}

#[repr(C)]
pub struct SLAndroidConfigurationItf_ {
    pub SetConfiguration: unsafe extern "C" fn(
        this: SLAndroidConfigurationItf,
        configKey: *const SLchar,
        pConfigValue: *const c_void,
        valueSize: SLuint32,
    ) -> SLresult,
    pub GetConfiguration: unsafe extern "C" fn(
        this: SLAndroidConfigurationItf,
        configKey: *const SLchar,
        pValueSize: *mut SLuint32,
        pConfigValue: *mut c_void,
    ) -> SLresult,
}

#[cfg(target_os = "android")]
#[link(name = "OpenSLES")]
extern "C" {
    pub static SL_IID_ENGINE: SLInterfaceID;
    pub static SL_IID_PLAY: SLInterfaceID;
    pub static SL_IID_PREFETCHSTATUS: SLInterfaceID;
    pub static SL_IID_VOLUME: SLInterfaceID;
    pub static SL_IID_PLAYBACKRATE: SLInterfaceID;
    pub static SL_IID_EFFECTSEND: SLInterfaceID;
    pub static SL_IID_ENVIRONMENTALREVERB: SLInterfaceID;
    pub static SL_IID_ANDROIDCONFIGURATION: SLInterfaceID;

    pub fn slCreateEngine(
        pEngine: *mut SLObjectItf,
        numOptions: SLuint32,
        pEngineOptions: *const SLEngineOption,
        numInterfaces: SLuint32,
        pInterfaceIds: *const SLInterfaceID,
        pInterfaceRequired: *const SLboolean,
    ) -> SLresult;
}
