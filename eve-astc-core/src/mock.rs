//! Recording engine for unit tests

use heapless::{String, Vec};

use eve_astc_hal::{
    BitmapFormat, ClearFlags, DisplayList, EngineControl, EngineError, EngineStatus,
    FlashTransfer, Primitive, Rgb, Tag, TouchInput, TouchTransform, WidgetOptions,
};

/// One engine call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Init,
    Backlight(u8),
    WriteTransform(TouchTransform),
    ReadTransform,
    InitFlash,
    ZeroFill { dest: u32, length: u32 },
    FlashRead { dest: u32, src: u32, length: u32 },
    BeginBatch,
    CommitBatch,
    DlStart,
    ClearColor(Rgb),
    Clear(ClearFlags),
    VertexFormat(u8),
    Color(Rgb),
    Tag(u8),
    SetBitmap {
        addr: u32,
        format: BitmapFormat,
        width: u16,
        height: u16,
    },
    Begin(Primitive),
    Vertex2f(i16, i16),
    End,
    SetBase(u8),
    Number {
        x: i16,
        y: i16,
        font: u8,
        options: WidgetOptions,
        value: i32,
    },
    Text {
        x: i16,
        y: i16,
        font: u8,
        options: WidgetOptions,
        text: String<32>,
    },
    Calibrate,
    Display,
    Swap,
}

pub struct MockEngine {
    pub ops: Vec<Op, 256>,
    pub busy: bool,
    pub tag: Tag,
    pub fail_init: bool,
    pub fail_flash: bool,
    pub fail_status: bool,
    pub fail_transfer: bool,
    pub calibrated: TouchTransform,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            busy: false,
            tag: Tag::NONE,
            fail_init: false,
            fail_flash: false,
            fail_status: false,
            fail_transfer: false,
            calibrated: TouchTransform::new(1, 2, 3, 4, 5, 6),
        }
    }

    fn record(&mut self, op: Op) -> Result<(), EngineError> {
        self.ops.push(op).expect("mock op log full");
        Ok(())
    }

    /// Recorded ops between the last `BeginBatch` and `CommitBatch`, inclusive
    pub fn last_batch(&self) -> &[Op] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == Op::BeginBatch)
            .expect("no batch recorded");
        &self.ops[start..]
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl EngineControl for MockEngine {
    fn init(&mut self) -> Result<(), EngineError> {
        self.record(Op::Init)?;
        if self.fail_init {
            Err(EngineError::NotResponding)
        } else {
            Ok(())
        }
    }

    fn set_backlight(&mut self, duty: u8) -> Result<(), EngineError> {
        self.record(Op::Backlight(duty))
    }
}

impl EngineStatus for MockEngine {
    fn is_busy(&mut self) -> Result<bool, EngineError> {
        if self.fail_status {
            Err(EngineError::Communication)
        } else {
            Ok(self.busy)
        }
    }
}

impl TouchInput for MockEngine {
    fn touch_tag(&mut self) -> Result<Tag, EngineError> {
        Ok(self.tag)
    }

    fn write_touch_transform(&mut self, transform: &TouchTransform) -> Result<(), EngineError> {
        self.record(Op::WriteTransform(*transform))
    }

    fn read_touch_transform(&mut self) -> Result<TouchTransform, EngineError> {
        self.record(Op::ReadTransform)?;
        Ok(self.calibrated)
    }
}

impl FlashTransfer for MockEngine {
    fn init_flash(&mut self) -> Result<(), EngineError> {
        self.record(Op::InitFlash)?;
        if self.fail_flash {
            Err(EngineError::FlashUnavailable)
        } else {
            Ok(())
        }
    }

    fn zero_fill(&mut self, dest: u32, length: u32) -> Result<(), EngineError> {
        self.record(Op::ZeroFill { dest, length })
    }

    fn flash_read(&mut self, dest: u32, src: u32, length: u32) -> Result<(), EngineError> {
        if self.fail_transfer {
            return Err(EngineError::Communication);
        }
        self.record(Op::FlashRead { dest, src, length })
    }
}

impl DisplayList for MockEngine {
    fn begin_batch(&mut self) -> Result<(), EngineError> {
        self.record(Op::BeginBatch)
    }

    fn commit_batch(&mut self) -> Result<(), EngineError> {
        self.record(Op::CommitBatch)
    }

    fn dl_start(&mut self) -> Result<(), EngineError> {
        self.record(Op::DlStart)
    }

    fn clear_color(&mut self, color: Rgb) -> Result<(), EngineError> {
        self.record(Op::ClearColor(color))
    }

    fn clear(&mut self, flags: ClearFlags) -> Result<(), EngineError> {
        self.record(Op::Clear(flags))
    }

    fn vertex_format(&mut self, frac_bits: u8) -> Result<(), EngineError> {
        self.record(Op::VertexFormat(frac_bits))
    }

    fn color(&mut self, color: Rgb) -> Result<(), EngineError> {
        self.record(Op::Color(color))
    }

    fn tag(&mut self, tag: u8) -> Result<(), EngineError> {
        self.record(Op::Tag(tag))
    }

    fn set_bitmap(
        &mut self,
        addr: u32,
        format: BitmapFormat,
        width: u16,
        height: u16,
    ) -> Result<(), EngineError> {
        self.record(Op::SetBitmap {
            addr,
            format,
            width,
            height,
        })
    }

    fn begin(&mut self, primitive: Primitive) -> Result<(), EngineError> {
        self.record(Op::Begin(primitive))
    }

    fn vertex2f(&mut self, x: i16, y: i16) -> Result<(), EngineError> {
        self.record(Op::Vertex2f(x, y))
    }

    fn end(&mut self) -> Result<(), EngineError> {
        self.record(Op::End)
    }

    fn set_base(&mut self, base: u8) -> Result<(), EngineError> {
        self.record(Op::SetBase(base))
    }

    fn number(
        &mut self,
        x: i16,
        y: i16,
        font: u8,
        options: WidgetOptions,
        value: i32,
    ) -> Result<(), EngineError> {
        self.record(Op::Number {
            x,
            y,
            font,
            options,
            value,
        })
    }

    fn text(
        &mut self,
        x: i16,
        y: i16,
        font: u8,
        options: WidgetOptions,
        text: &str,
    ) -> Result<(), EngineError> {
        let mut owned = String::new();
        owned.push_str(text).expect("mock text too long");
        self.record(Op::Text {
            x,
            y,
            font,
            options,
            text: owned,
        })
    }

    fn calibrate(&mut self) -> Result<(), EngineError> {
        self.record(Op::Calibrate)
    }

    fn display(&mut self) -> Result<(), EngineError> {
        self.record(Op::Display)
    }

    fn swap(&mut self) -> Result<(), EngineError> {
        self.record(Op::Swap)
    }
}
