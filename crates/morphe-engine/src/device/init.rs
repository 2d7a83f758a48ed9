/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is supported everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Adapter selection hint.
    pub power_preference: wgpu::PowerPreference,

    /// Backends the instance may pick from.
    pub backends: wgpu::Backends,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface. A hint only.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            backends: wgpu::Backends::all(),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Partial [`GpuInit`]: each `Some` field replaces the base value.
#[derive(Debug, Clone, Default)]
pub struct GpuOverrides {
    pub prefer_srgb: Option<bool>,
    pub present_mode: Option<wgpu::PresentMode>,
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub power_preference: Option<wgpu::PowerPreference>,
    pub backends: Option<wgpu::Backends>,
    pub required_features: Option<wgpu::Features>,
    pub required_limits: Option<wgpu::Limits>,
    pub desired_maximum_frame_latency: Option<u32>,
}

impl GpuInit {
    /// Spreads `overrides` over `self`.
    pub fn with_overrides(mut self, overrides: GpuOverrides) -> Self {
        let GpuOverrides {
            prefer_srgb,
            present_mode,
            alpha_mode,
            power_preference,
            backends,
            required_features,
            required_limits,
            desired_maximum_frame_latency,
        } = overrides;

        if let Some(v) = prefer_srgb {
            self.prefer_srgb = v;
        }
        if let Some(v) = present_mode {
            self.present_mode = v;
        }
        if alpha_mode.is_some() {
            self.alpha_mode = alpha_mode;
        }
        if let Some(v) = power_preference {
            self.power_preference = v;
        }
        if let Some(v) = backends {
            self.backends = v;
        }
        if let Some(v) = required_features {
            self.required_features = v;
        }
        if let Some(v) = required_limits {
            self.required_limits = v;
        }
        if let Some(v) = desired_maximum_frame_latency {
            self.desired_maximum_frame_latency = v;
        }
        self
    }
}
